// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, BackendType};
    use std::path::PathBuf;
    use std::time::Duration;

    /// Shipped local configuration loads and points at the default library root
    #[test]
    fn test_local_yaml_loading() {
        let config = load_and_validate_config("configs/local.yaml").unwrap();

        assert_eq!(config.backend, BackendType::Local);
        assert_eq!(config.library_dir(), PathBuf::from("clib"));
        assert!(config.library_path.is_none());
        assert_eq!(config.gateway.timeout(), Duration::from_secs(30));
        assert!(config.defaults.language.is_none());
        assert!(!config.defaults.with_verification);
    }

    /// Shipped gRPC configuration carries endpoint, deadlines and request defaults
    #[test]
    fn test_grpc_yaml_loading() {
        let config = load_and_validate_config("configs/grpc.yaml").unwrap();

        assert_eq!(config.backend, BackendType::Grpc);
        assert_eq!(config.endpoint(), "http://localhost:8778");
        assert_eq!(config.gateway.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.defaults.language.as_deref(), Some("eng"));
        assert!(config.defaults.with_verification);
        assert_eq!(config.defaults.sources, vec![1, 4]);
    }
}
