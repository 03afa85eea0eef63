use anyhow::Result;
use httpmock::prelude::*;
use iss_passes::{IssError, IssPipeline, PassEngine, ServiceConfig};
use serde_json::json;

fn engine_for(server: &MockServer) -> PassEngine<IssPipeline<ServiceConfig>> {
    PassEngine::new(IssPipeline::new(ServiceConfig::all_at(&server.base_url())))
}

#[tokio::test]
async fn test_end_to_end_returns_pass_list_unmodified() -> Result<()> {
    let server = MockServer::start_async().await;

    let ip_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/").query_param("format", "json");
            then.status(200).json_body(json!({"ip": "1.2.3.4"}));
        })
        .await;

    let geo_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/json/1.2.3.4");
            then.status(200)
                .json_body(json!({"latitude": "49.2", "longitude": "-123.1"}));
        })
        .await;

    let pass_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/iss-pass.json")
                .query_param("lat", "49.2")
                .query_param("lon", "-123.1");
            then.status(200)
                .json_body(json!({"response": [{"duration": 600, "risetime": 1700000000}]}));
        })
        .await;

    let passes = engine_for(&server).next_passes_for_current_location().await?;

    ip_mock.assert_async().await;
    geo_mock.assert_async().await;
    pass_mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&passes)?,
        json!([{"duration": 600, "risetime": 1700000000}])
    );
    Ok(())
}

#[tokio::test]
async fn test_geolocation_outage_short_circuits() -> Result<()> {
    let server = MockServer::start_async().await;

    let ip_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({"ip": "1.2.3.4"}));
        })
        .await;

    let geo_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/json/1.2.3.4");
            then.status(503).body("Service Unavailable");
        })
        .await;

    let pass_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/iss-pass.json");
            then.status(200).json_body(json!({"response": []}));
        })
        .await;

    let err = engine_for(&server)
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    match err {
        IssError::UpstreamError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected UpstreamError, got {:?}", other),
    }
    ip_mock.assert_hits_async(1).await;
    geo_mock.assert_hits_async(1).await;
    pass_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_ip_transport_failure_skips_later_stages() -> Result<()> {
    let server = MockServer::start_async().await;

    let geo_mock = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/json/");
            then.status(200)
                .json_body(json!({"latitude": "49.2", "longitude": "-123.1"}));
        })
        .await;

    let pass_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/iss-pass.json");
            then.status(200).json_body(json!({"response": []}));
        })
        .await;

    let config = ServiceConfig {
        ip_endpoint: "http://127.0.0.1:1".to_string(),
        ..ServiceConfig::all_at(&server.base_url())
    };
    let err = PassEngine::new(IssPipeline::new(config))
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    assert!(matches!(err, IssError::TransportError { .. }));
    geo_mock.assert_hits_async(0).await;
    pass_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_ip_server_error_carries_status_and_body() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(500).body("internal error");
        })
        .await;

    let err = engine_for(&server)
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        IssError::UpstreamError { status: 500, ref body, .. } if body == "internal error"
    ));
    Ok(())
}

#[tokio::test]
async fn test_pass_service_garbage_is_parse_error() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({"ip": "1.2.3.4"}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/1.2.3.4");
            then.status(200)
                .json_body(json!({"latitude": "49.2", "longitude": "-123.1"}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/iss-pass.json");
            then.status(200).body("{\"response\": [");
        })
        .await;

    let err = engine_for(&server)
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    assert!(matches!(err, IssError::ParseError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_separate_hosts_per_service() -> Result<()> {
    let ip_server = MockServer::start_async().await;
    let geo_server = MockServer::start_async().await;
    let pass_server = MockServer::start_async().await;

    ip_server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({"ip": "2001:db8::1"}));
        })
        .await;

    let geo_mock = geo_server
        .mock_async(|when, then| {
            when.method(GET).path("/json/2001:db8::1");
            then.status(200)
                .json_body(json!({"latitude": "51.5", "longitude": "-0.12"}));
        })
        .await;

    pass_server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/iss-pass.json")
                .query_param("lat", "51.5")
                .query_param("lon", "-0.12");
            then.status(200).json_body(json!({"response": [
                {"duration": 300, "risetime": 1700000000},
                {"duration": 550, "risetime": 1700006000},
                {"duration": 610, "risetime": 1700011800}
            ]}));
        })
        .await;

    let config = ServiceConfig {
        ip_endpoint: ip_server.base_url(),
        geo_endpoint: format!("{}/", geo_server.base_url()),
        pass_endpoint: pass_server.base_url(),
        strict_coordinates: true,
    };
    let passes = PassEngine::new(IssPipeline::new(config))
        .next_passes_for_current_location()
        .await?;

    geo_mock.assert_async().await;
    let durations: Vec<Option<i64>> = passes.iter().map(|p| p.duration()).collect();
    assert_eq!(durations, vec![Some(300), Some(550), Some(610)]);
    Ok(())
}

#[tokio::test]
async fn test_geolocation_transport_failure_skips_pass_stage() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({"ip": "1.2.3.4"}));
        })
        .await;

    let pass_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/iss-pass.json");
            then.status(200).json_body(json!({"response": []}));
        })
        .await;

    let config = ServiceConfig {
        geo_endpoint: "http://127.0.0.1:1".to_string(),
        ..ServiceConfig::all_at(&server.base_url())
    };
    let err = PassEngine::new(IssPipeline::new(config))
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        IssError::TransportError { ref url, .. } if url == "http://127.0.0.1:1/json/1.2.3.4"
    ));
    pass_mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_pass_stage_failures_reach_caller() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).json_body(json!({"ip": "1.2.3.4"}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/json/1.2.3.4");
            then.status(200)
                .json_body(json!({"latitude": "49.2", "longitude": "-123.1"}));
        })
        .await;

    let pass_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/iss-pass.json");
            then.status(500).body("boom");
        })
        .await;

    let err = engine_for(&server)
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    pass_mock.assert_hits_async(1).await;
    assert!(matches!(
        err,
        IssError::UpstreamError { status: 500, ref body, .. } if body == "boom"
    ));

    let unreachable = ServiceConfig {
        pass_endpoint: "http://127.0.0.1:1".to_string(),
        ..ServiceConfig::all_at(&server.base_url())
    };
    let err = PassEngine::new(IssPipeline::new(unreachable))
        .next_passes_for_current_location()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        IssError::TransportError { ref url, .. }
            if url == "http://127.0.0.1:1/iss-pass.json?lat=49.2&lon=-123.1"
    ));
    Ok(())
}
