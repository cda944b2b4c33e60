//! Database configuration drafts for the setup wizard.

use std::fmt;

use crate::security::SecretString;

/// Supported backing database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Sqlite,
    Postgres,
    Mysql,
}

impl DatabaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Sqlite => "sqlite",
            DatabaseKind::Postgres => "postgres",
            DatabaseKind::Mysql => "mysql",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection parameters for a server-backed engine.
///
/// The password never leaves this struct through `Debug` output.
#[derive(Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Option<SecretString>,
    pub database: String,
    pub ssl: Option<bool>,
}

/// A candidate database configuration, validated locally before being
/// submitted to the backend.
///
/// 数据库配置草稿，提交前先本地校验。
#[derive(Debug)]
pub enum DatabaseConfigDraft {
    Sqlite { database: String },
    Postgres(ServerConfig),
    Mysql(ServerConfig),
}

/// Validation failures for a configuration draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseConfigError {
    #[error("database name is required")]
    DatabaseNameRequired,

    #[error("host is required")]
    HostRequired,

    #[error("port must be between 1 and 65535")]
    PortOutOfRange,

    #[error("username is required")]
    UsernameRequired,
}

impl DatabaseConfigDraft {
    pub fn kind(&self) -> DatabaseKind {
        match self {
            DatabaseConfigDraft::Sqlite { .. } => DatabaseKind::Sqlite,
            DatabaseConfigDraft::Postgres(_) => DatabaseKind::Postgres,
            DatabaseConfigDraft::Mysql(_) => DatabaseKind::Mysql,
        }
    }

    /// Pre-filled draft matching the defaults offered by the wizard.
    pub fn default_for(kind: DatabaseKind) -> Self {
        match kind {
            DatabaseKind::Sqlite => DatabaseConfigDraft::Sqlite {
                database: DEFAULT_SQLITE_DATABASE.to_string(),
            },
            DatabaseKind::Postgres => DatabaseConfigDraft::Postgres(ServerConfig {
                host: "localhost".to_string(),
                port: 5432,
                username: "postgres".to_string(),
                password: None,
                database: DEFAULT_SERVER_DATABASE.to_string(),
                ssl: None,
            }),
            DatabaseKind::Mysql => DatabaseConfigDraft::Mysql(ServerConfig {
                host: "localhost".to_string(),
                port: 3306,
                username: "root".to_string(),
                password: None,
                database: DEFAULT_SERVER_DATABASE.to_string(),
                ssl: None,
            }),
        }
    }

    /// Validate the draft before submission.
    ///
    /// Mirrors the backend's own rules so obviously broken input never
    /// reaches the wire.
    pub fn validate(&self) -> Result<(), DatabaseConfigError> {
        match self {
            DatabaseConfigDraft::Sqlite { database } => {
                if database.trim().is_empty() {
                    return Err(DatabaseConfigError::DatabaseNameRequired);
                }
                Ok(())
            }
            DatabaseConfigDraft::Postgres(server) | DatabaseConfigDraft::Mysql(server) => {
                if server.host.trim().is_empty() {
                    return Err(DatabaseConfigError::HostRequired);
                }
                if server.port == 0 {
                    return Err(DatabaseConfigError::PortOutOfRange);
                }
                if server.username.trim().is_empty() {
                    return Err(DatabaseConfigError::UsernameRequired);
                }
                if server.database.trim().is_empty() {
                    return Err(DatabaseConfigError::DatabaseNameRequired);
                }
                Ok(())
            }
        }
    }
}

const DEFAULT_SQLITE_DATABASE: &str = "watchdeck.db";
const DEFAULT_SERVER_DATABASE: &str = "watchdeck";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sqlite_draft_is_valid() {
        let draft = DatabaseConfigDraft::default_for(DatabaseKind::Sqlite);
        assert_eq!(draft.kind(), DatabaseKind::Sqlite);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn default_server_drafts_use_engine_conventions() {
        let postgres = DatabaseConfigDraft::default_for(DatabaseKind::Postgres);
        let mysql = DatabaseConfigDraft::default_for(DatabaseKind::Mysql);

        match postgres {
            DatabaseConfigDraft::Postgres(server) => {
                assert_eq!(server.port, 5432);
                assert_eq!(server.username, "postgres");
            }
            other => panic!("unexpected draft: {other:?}"),
        }
        match mysql {
            DatabaseConfigDraft::Mysql(server) => {
                assert_eq!(server.port, 3306);
                assert_eq!(server.username, "root");
            }
            other => panic!("unexpected draft: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_blank_sqlite_database_name() {
        let draft = DatabaseConfigDraft::Sqlite {
            database: "   ".to_string(),
        };
        assert_eq!(
            draft.validate(),
            Err(DatabaseConfigError::DatabaseNameRequired)
        );
    }

    #[test]
    fn validate_rejects_zero_port() {
        let draft = DatabaseConfigDraft::Postgres(ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            username: "postgres".to_string(),
            password: None,
            database: "watchdeck".to_string(),
            ssl: None,
        });
        assert_eq!(draft.validate(), Err(DatabaseConfigError::PortOutOfRange));
    }

    #[test]
    fn debug_output_redacts_password() {
        let draft = DatabaseConfigDraft::Mysql(ServerConfig {
            host: "localhost".to_string(),
            port: 3306,
            username: "root".to_string(),
            password: Some(SecretString::new("s3cret".to_string())),
            database: "watchdeck".to_string(),
            ssl: None,
        });
        let rendered = format!("{draft:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("s3cret"));
    }
}
