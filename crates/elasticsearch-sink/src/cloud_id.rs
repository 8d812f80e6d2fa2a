//! Elastic Cloud ID decoding.
//!
//! A cloud ID has the form `name:base64(host$es_uuid$kibana_uuid)`, where
//! `host` may carry a port. The Elasticsearch endpoint is
//! `https://{es_uuid}.{host}`.

use crate::error::ElasticsearchError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Resolve a cloud ID to the HTTPS base URL of its Elasticsearch endpoint.
pub fn cloud_id_to_url(cloud_id: &str) -> Result<String, ElasticsearchError> {
    let (_, encoded) = cloud_id
        .split_once(':')
        .ok_or_else(|| ElasticsearchError::CloudId("missing ':' separator".to_string()))?;

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|e| ElasticsearchError::CloudId(format!("invalid base64: {e}")))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|e| ElasticsearchError::CloudId(format!("invalid UTF-8: {e}")))?;

    let mut parts = decoded.split('$');
    let host = parts
        .next()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ElasticsearchError::CloudId("missing host".to_string()))?;
    let es_uuid = parts
        .next()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ElasticsearchError::CloudId("missing Elasticsearch id".to_string()))?;

    let url = match host.split_once(':') {
        Some((host, port)) => format!("https://{es_uuid}.{host}:{port}"),
        None => format!("https://{es_uuid}.{host}"),
    };
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(name: &str, payload: &str) -> String {
        format!("{name}:{}", STANDARD.encode(payload))
    }

    #[test]
    fn test_cloud_id_without_port() {
        let cloud_id = encode("my-deployment", "us-east-1.aws.found.io$abc123$def456");
        assert_eq!(
            cloud_id_to_url(&cloud_id).unwrap(),
            "https://abc123.us-east-1.aws.found.io"
        );
    }

    #[test]
    fn test_cloud_id_with_port() {
        let cloud_id = encode("staging", "eu-west-1.aws.found.io:9243$abc123$def456");
        assert_eq!(
            cloud_id_to_url(&cloud_id).unwrap(),
            "https://abc123.eu-west-1.aws.found.io:9243"
        );
    }

    #[test]
    fn test_cloud_id_without_kibana_part() {
        let cloud_id = encode("d", "example.com$es");
        assert_eq!(cloud_id_to_url(&cloud_id).unwrap(), "https://es.example.com");
    }

    #[test]
    fn test_invalid_cloud_ids() {
        for cloud_id in [
            "no-separator".to_string(),
            "name:not base64!".to_string(),
            encode("name", "host-only"),
            encode("name", "$abc"),
        ] {
            let result = cloud_id_to_url(&cloud_id);
            assert!(
                matches!(result, Err(ElasticsearchError::CloudId(_))),
                "{cloud_id} should be rejected"
            );
        }
    }
}
