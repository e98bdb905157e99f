use crate::config::{app_config::CertificateProvider, nats_config::ClientConfig as NatsClientConf};
use anyhow::{Context, Result};
use async_nats::ConnectOptions;
use rustls::{ClientConfig, RootCertStore};

pub struct NatsClient {
    pub client_config: NatsClientConf,
}
impl NatsClient {
    fn client_configuration(certificate_provider: &impl CertificateProvider) -> Result<ClientConfig> {
        let mut store = RootCertStore::empty();
        let ca = certificate_provider.root_ca().unwrap();
        let cert = certificate_provider.certificate().unwrap();
        let private_key = certificate_provider.private_key().unwrap();
        store.add(ca).unwrap();
        ClientConfig::builder()
            .with_root_certificates(store) // Add the CA certs
            .with_client_auth_cert(vec![cert], private_key) // Set the client cert and private key
            .context("Unable to build client configuration!")
    }

    pub async fn connect(&self) -> Result<async_nats::Client> {
        let address = format!("tls://{}:{}", self.client_config.host, self.client_config.port);
        let options = ConnectOptions::new()
            .tls_client_config(NatsClient::client_configuration(&self.client_config.cert).unwrap())
            .require_tls(true)
            .name("lumen-controller");

        async_nats::connect_with_options(address, options)
            .await
            .context("Cannot connect to nats server")
    }
}
