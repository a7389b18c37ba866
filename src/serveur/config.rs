//! Configuration du serveur HTTP de la calculatrice.

use std::net::{IpAddr, SocketAddr};

use crate::noyau::Limites;

/// Configuration du serveur (construite par la CLI, `Default` sinon).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Adresse IP d’écoute
    pub host: IpAddr,
    /// Port d’écoute
    pub port: u16,
    /// CORS ouvert à toutes les origines (développement)
    pub cors_all: bool,
    /// Taille max du corps de requête, en Kio
    pub max_body_size_kb: u64,
    /// Garde-fous transmis au noyau
    pub limites: Limites,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [127, 0, 0, 1].into(),
            port: 5000,
            cors_all: false,
            max_body_size_kb: 16,
            limites: Limites::default(),
        }
    }
}

impl ServerConfig {
    /// Taille max du corps, en octets
    pub fn max_payload_size(&self) -> usize {
        (self.max_body_size_kb as usize) * 1024
    }

    pub fn adresse(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
