//! Blocking RESTCONF client for Cisco NSO.

use super::error::ClientError;
use super::push::{PushResponse, PUSH_SUCCESS_STATUSES};
use super::urls;
use crate::model::VendorFamily;
use crate::pipeline::DeviceSource;
use serde_json::Value;
use std::time::Duration;

#[cfg(feature = "restconf")]
const YANG_JSON: &str = "application/yang-data+json";
#[cfg(feature = "restconf")]
const YANG_XML: &str = "application/yang-data+xml";

/// Connection settings for NSO.
#[derive(Clone)]
pub struct RestconfConfig {
    /// `scheme://host:port`, without a trailing slash
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Timeout for read requests
    pub timeout: Duration,
    /// Timeout for configuration pushes
    pub push_timeout: Duration,
    /// Accept self-signed or otherwise invalid TLS certificates
    pub insecure: bool,
}

impl Default for RestconfConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            timeout: Duration::from_secs(10),
            push_timeout: Duration::from_secs(30),
            insecure: false,
        }
    }
}

impl std::fmt::Debug for RestconfConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestconfConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("push_timeout", &self.push_timeout)
            .field("insecure", &self.insecure)
            .finish()
    }
}

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HttpReply {
    status: u16,
    body: String,
    elapsed: Duration,
}

impl HttpReply {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the NSO RESTCONF API.
#[derive(Debug)]
pub struct RestconfClient {
    config: RestconfConfig,
    #[cfg(feature = "restconf")]
    http: reqwest::blocking::Client,
}

impl RestconfClient {
    /// Create a new client.
    #[cfg(feature = "restconf")]
    pub fn new(config: RestconfConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;
        Ok(Self { config, http })
    }

    #[cfg(not(feature = "restconf"))]
    pub fn new(config: RestconfConfig) -> Result<Self, ClientError> {
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &RestconfConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Check that the RESTCONF API answers.
    pub fn test_connectivity(&self) -> Result<(), ClientError> {
        let url = self.url(urls::YANG_LIBRARY_PATH);
        let reply = self.get(&url)?;
        ensure_success(&url, &reply)?;
        tracing::info!("RESTCONF connectivity successful");
        Ok(())
    }

    /// Names of all devices managed by NSO, in NSO's order.
    pub fn list_devices(&self) -> Result<Vec<String>, ClientError> {
        let url = self.url(urls::DEVICES_PATH);
        let reply = self.get(&url)?;
        ensure_success(&url, &reply)?;
        let devices = parse_device_list(&url, read_json(&url, &reply)?)?;
        tracing::info!("Found {} device(s)", devices.len());
        Ok(devices)
    }

    /// NED id of a device, trying each connection type in turn.
    pub fn detect_platform(&self, device: &str) -> Result<String, ClientError> {
        for connection_type in urls::CONNECTION_TYPES {
            let url = self.url(&urls::platform_path(device, connection_type));
            let found = self
                .get(&url)
                .and_then(|reply| read_json(&url, &reply))
                .map(|body| body.as_ref().and_then(parse_ned_id));
            match found {
                Ok(Some(platform)) => {
                    tracing::info!("{device}: platform {platform} (via {connection_type})");
                    return Ok(platform);
                }
                Ok(None) => tracing::debug!("{device}: no ned-id via {connection_type}"),
                Err(e) => tracing::debug!("{device}: platform lookup via {connection_type} failed: {e}"),
            }
        }
        Err(ClientError::PlatformNotFound {
            device: device.to_string(),
        })
    }

    /// Raw interface configuration of a device.
    ///
    /// `Ok(None)` means NSO has no interface data for the device.
    pub fn fetch_interfaces(
        &self,
        device: &str,
        family: VendorFamily,
    ) -> Result<Option<Value>, ClientError> {
        let path = urls::interfaces_path(device, family)
            .ok_or(ClientError::NoInterfacePath { family })?;
        let url = self.url(&path);
        let reply = self.get(&url)?;
        read_json(&url, &reply)
    }

    /// PATCH an XML payload into a device's configuration.
    pub fn push_config(&self, device: &str, xml: &str) -> Result<PushResponse, ClientError> {
        let url = self.url(&urls::config_path(device));
        tracing::info!("Pushing configuration to {device}");
        tracing::debug!("PATCH {url}");
        let reply = self.patch_xml(&url, xml)?;
        if !PUSH_SUCCESS_STATUSES.contains(&reply.status) {
            return Err(ClientError::Status {
                url,
                status: reply.status,
                body: reply.body,
            });
        }
        Ok(PushResponse {
            status: reply.status,
            body: reply.body,
            elapsed: reply.elapsed,
        })
    }

    #[cfg(feature = "restconf")]
    fn get(&self, url: &str) -> Result<HttpReply, ClientError> {
        tracing::debug!("GET {url}");
        let request = self
            .http
            .get(url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(reqwest::header::ACCEPT, YANG_JSON);
        send(url, request)
    }

    #[cfg(not(feature = "restconf"))]
    fn get(&self, _url: &str) -> Result<HttpReply, ClientError> {
        Err(ClientError::FeatureDisabled)
    }

    #[cfg(feature = "restconf")]
    fn patch_xml(&self, url: &str, xml: &str) -> Result<HttpReply, ClientError> {
        let request = self
            .http
            .patch(url)
            .timeout(self.config.push_timeout)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(reqwest::header::CONTENT_TYPE, YANG_XML)
            .header(reqwest::header::ACCEPT, YANG_JSON)
            .body(xml.to_string());
        send(url, request)
    }

    #[cfg(not(feature = "restconf"))]
    fn patch_xml(&self, _url: &str, _xml: &str) -> Result<HttpReply, ClientError> {
        Err(ClientError::FeatureDisabled)
    }
}

#[cfg(feature = "restconf")]
fn send(url: &str, request: reqwest::blocking::RequestBuilder) -> Result<HttpReply, ClientError> {
    let started = std::time::Instant::now();
    let response = request
        .send()
        .map_err(|e| ClientError::transport(url, e))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| ClientError::transport(url, e))?;
    Ok(HttpReply {
        status,
        body,
        elapsed: started.elapsed(),
    })
}

impl DeviceSource for RestconfClient {
    fn list_devices(&self) -> Result<Vec<String>, ClientError> {
        Self::list_devices(self)
    }

    fn detect_platform(&self, device: &str) -> Result<String, ClientError> {
        Self::detect_platform(self, device)
    }

    fn fetch_interfaces(
        &self,
        device: &str,
        family: VendorFamily,
    ) -> Result<Option<Value>, ClientError> {
        Self::fetch_interfaces(self, device, family)
    }
}

fn ensure_success(url: &str, reply: &HttpReply) -> Result<(), ClientError> {
    if reply.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status {
            url: url.to_string(),
            status: reply.status,
            body: reply.body.clone(),
        })
    }
}

/// Decode a JSON reply; `204`, `404` and an empty body carry no data.
fn read_json(url: &str, reply: &HttpReply) -> Result<Option<Value>, ClientError> {
    if matches!(reply.status, 204 | 404) {
        return Ok(None);
    }
    ensure_success(url, reply)?;
    if reply.body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&reply.body)
        .map(Some)
        .map_err(|e| ClientError::decode(url, e))
}

fn parse_device_list(url: &str, body: Option<Value>) -> Result<Vec<String>, ClientError> {
    let Some(body) = body else {
        return Ok(Vec::new());
    };
    let Some(devices) = body.get("tailf-ncs:device") else {
        return Ok(Vec::new());
    };
    let devices = devices
        .as_array()
        .ok_or_else(|| ClientError::decode(url, "tailf-ncs:device is not a list"))?;
    Ok(devices
        .iter()
        .filter_map(|device| device.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}

fn parse_ned_id(body: &Value) -> Option<String> {
    body.get("tailf-ncs:ned-id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
