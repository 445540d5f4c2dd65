use wacloud_client::ApiClient;
use wacloud_core::ApiConfig;

/// Client wired to a mockito server, keeping the default "v23.0" version
/// prefix so mock paths mirror real API paths.
pub fn api_client(server: &mockito::ServerGuard) -> ApiClient {
    let config = ApiConfig::new("test-token").with_base_url(server.url());
    ApiClient::new(config).expect("client should build")
}
