#[macro_use]
extern crate rocket;

pub mod config;
pub mod contacts;
pub mod db;
pub mod error;
pub mod models;
pub mod request_logger;
pub mod routes;

use crate::config::ImportConfig;
use crate::contacts::{PgContactStore, SharedContactStore};
use crate::db::ClaimDeskDb;
use crate::request_logger::RequestLogger;
use env_logger::Env;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::AdHoc;
use rocket::http::Method;
use rocket::{Build, Rocket};
use rocket_cors::{AllowedOrigins, CorsOptions};
use rocket_db_pools::Database;
use rocket_okapi::{
    openapi_get_routes,
    rapidoc::{GeneralConfig, HideShowConfig, RapiDocConfig, make_rapidoc},
    settings::UrlObject,
    swagger_ui::{SwaggerUIConfig, make_swagger_ui},
};
use std::sync::{Arc, Once};

static LOGGER: Once = Once::new();

/// Initialize `env_logger` once; `RUST_LOG` overrides the default filter.
pub fn init_logger() {
    LOGGER.call_once(|| {
        env_logger::Builder::from_env(
            Env::default().default_filter_or("info,rocket::server=warn,rocket::request=warn"),
        )
        .init();
    });
}

pub fn rocket() -> Rocket<Build> {
    init_logger();

    let import_config = ImportConfig::from_env();
    log::info!(
        "import limits: {} byte payloads, template `{}`",
        import_config.max_payload_bytes,
        import_config.template_file_name
    );

    let allowed_origins = if import_config.cors_allow_all {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact::<&str>(&[])
    };

    // Configure CORS
    let cors = CorsOptions::default()
        .allowed_origins(allowed_origins)
        .allowed_methods(
            vec![Method::Get, Method::Post]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .expect("Error creating CORS");

    let limits = Limits::default().limit("json", import_config.max_payload_bytes.bytes());
    let figment = rocket::Config::figment().merge(("limits", limits));

    rocket::custom(figment)
        .attach(RequestLogger)
        .attach(ClaimDeskDb::init())
        .attach(cors)
        .manage(import_config)
        // Run database migrations on startup
        .attach(AdHoc::try_on_ignite(
            "Run Migrations",
            |rocket| async move {
                match ClaimDeskDb::fetch(&rocket) {
                    Some(pool) => match db::run_migrations(pool).await {
                        Ok(_) => {
                            log::info!("database migrations successful");
                            Ok(rocket)
                        }
                        Err(e) => {
                            log::error!("database migrations failed: {}", e);
                            Err(rocket)
                        }
                    },
                    None => {
                        log::error!("database pool not available for migrations");
                        Err(rocket)
                    }
                }
            },
        ))
        // Hand the pool to the contact store used by the import routes
        .attach(AdHoc::try_on_ignite(
            "Manage Contact Store",
            |rocket| async move {
                match ClaimDeskDb::fetch(&rocket) {
                    Some(db) => {
                        let pool = (**db).clone();
                        let store: SharedContactStore = Arc::new(PgContactStore::new(pool));
                        Ok(rocket.manage(store))
                    }
                    None => Err(rocket),
                }
            },
        ))
        .mount(
            "/api/v1",
            openapi_get_routes![
                // Health routes
                routes::health::health_check,
                // Contact routes
                routes::contacts::list_contacts,
                // Import routes
                routes::imports::preview_import,
                routes::imports::commit_import,
            ],
        )
        .mount("/api/v1", routes![routes::imports::download_template])
        .mount(
            "/api/docs/swagger/",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../../v1/openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/api/docs/rapidoc/",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("ClaimDesk API", "../../v1/openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
}

#[cfg_attr(not(test), allow(dead_code))]
pub mod test_support {
    use crate::config::ImportConfig;
    use crate::contacts::{ContactStore, NewContact, SharedContactStore, StoreError};
    use crate::models::StoredContact;
    use chrono::Utc;
    use rocket::config::LogLevel;
    use rocket::figment::Figment;
    use rocket::local::blocking::Client;
    use rocket::{Build, Rocket, Route};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    pub use database::{TestDatabase, TestDatabaseError};

    /// In-memory contact store for tests.
    ///
    /// Contacts whose name appears in the reject list are declined with `Ok(None)`.
    #[derive(Default)]
    pub struct MemoryContactStore {
        contacts: Mutex<Vec<StoredContact>>,
        rejected_names: Vec<String>,
    }

    impl MemoryContactStore {
        pub fn rejecting(names: &[&str]) -> Self {
            Self {
                contacts: Mutex::new(Vec::new()),
                rejected_names: names.iter().map(|name| name.to_string()).collect(),
            }
        }

        pub fn len(&self) -> usize {
            self.lock().len()
        }

        pub fn is_empty(&self) -> bool {
            self.lock().is_empty()
        }

        pub fn names(&self) -> Vec<String> {
            self.lock().iter().map(|c| c.name.clone()).collect()
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StoredContact>> {
            self.contacts
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    #[rocket::async_trait]
    impl ContactStore for MemoryContactStore {
        async fn create(&self, contact: NewContact) -> Result<Option<StoredContact>, StoreError> {
            if self.rejected_names.contains(&contact.name) {
                return Ok(None);
            }

            let stored = StoredContact {
                id: Uuid::new_v4(),
                name: contact.name,
                phone: contact.phone,
                email: contact.email,
                role: contact.role,
                organization: contact.organization,
                notes: contact.notes,
                created_at: Utc::now(),
            };
            self.lock().push(stored.clone());
            Ok(Some(stored))
        }

        async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StoredContact>, StoreError> {
            let contacts = self.lock();
            Ok(contacts
                .iter()
                .rev()
                .skip(offset.max(0) as usize)
                .take(limit.max(0) as usize)
                .cloned()
                .collect())
        }
    }

    pub mod database {
        use log::LevelFilter;
        use rocket_db_pools::sqlx::postgres::{PgConnectOptions, PgPoolOptions};
        use rocket_db_pools::sqlx::{self, ConnectOptions, PgPool};
        use testcontainers_modules::postgres::Postgres;
        use testcontainers::{
            ContainerAsync, core::error::TestcontainersError, runners::AsyncRunner,
        };
        use thiserror::Error;
        use tokio::runtime::Handle;
        use uuid::Uuid;

        static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

        #[derive(Debug, Error)]
        pub enum TestDatabaseError {
            #[error("TEST_DATABASE_URL not set and CLAIMDESK_TEST_CONTAINERS not enabled")]
            MissingUrl,
            #[error("database error: {0}")]
            Sqlx(#[from] sqlx::Error),
            #[error("migration error: {0}")]
            Migration(#[from] sqlx::migrate::MigrateError),
            #[error("container error: {0}")]
            Container(#[from] TestcontainersError),
        }

        /// Ephemeral database factory for integration tests.
        ///
        /// Each instance creates a uniquely named database, runs migrations and
        /// drops it again on close.
        pub struct TestDatabase {
            pool: Option<PgPool>,
            admin_options: PgConnectOptions,
            database_name: String,
            container: Option<ContainerAsync<Postgres>>,
        }

        impl TestDatabase {
            /// Provision a database on `TEST_DATABASE_URL`, or in a disposable
            /// Postgres container when `CLAIMDESK_TEST_CONTAINERS=1`.
            pub async fn new_from_env() -> Result<Self, TestDatabaseError> {
                if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
                    return Self::with_base_url(&url, None).await;
                }

                let containers_enabled = std::env::var("CLAIMDESK_TEST_CONTAINERS")
                    .map(|value| matches!(value.as_str(), "1" | "true" | "yes"))
                    .unwrap_or(false);
                if !containers_enabled {
                    return Err(TestDatabaseError::MissingUrl);
                }

                let container = Postgres::default().start().await?;
                let host = container.get_host().await?.to_string();
                let port = container.get_host_port_ipv4(5432).await?;
                let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

                Self::with_base_url(&url, Some(container)).await
            }

            async fn with_base_url(
                url: &str,
                container: Option<ContainerAsync<Postgres>>,
            ) -> Result<Self, TestDatabaseError> {
                let base_options: PgConnectOptions = url.parse().map_err(TestDatabaseError::Sqlx)?;
                let base_options = base_options.log_statements(LevelFilter::Off);

                let base_name = base_options
                    .get_database()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "postgres".to_string());

                let admin_options = base_options.clone().database("postgres");
                let admin_pool = PgPoolOptions::new()
                    .max_connections(1)
                    .connect_with(admin_options.clone())
                    .await?;

                let new_db_name = format!("{}_{}", base_name, Uuid::new_v4().simple());
                let create_sql = format!("CREATE DATABASE \"{}\" TEMPLATE template0", new_db_name);
                sqlx::query(&create_sql).execute(&admin_pool).await?;
                admin_pool.close().await;

                let pool = PgPoolOptions::new()
                    .max_connections(5)
                    .connect_with(base_options.clone().database(&new_db_name))
                    .await?;

                MIGRATOR.run(&pool).await?;

                Ok(Self {
                    pool: Some(pool),
                    admin_options,
                    database_name: new_db_name,
                    container,
                })
            }

            pub fn pool(&self) -> &PgPool {
                self.pool.as_ref().expect("test database pool is available")
            }

            pub fn pool_clone(&self) -> PgPool {
                self.pool().clone()
            }

            /// Close pool connections and drop the ephemeral database.
            pub async fn close(mut self) -> Result<(), TestDatabaseError> {
                if let Some(pool) = self.pool.take() {
                    pool.close().await;
                }

                drop_database_with_fallback(self.admin_options.clone(), &self.database_name)
                    .await?;

                if let Some(container) = self.container.take() {
                    drop(container);
                }

                Ok(())
            }
        }

        async fn drop_database_with_fallback(
            admin_options: PgConnectOptions,
            database_name: &str,
        ) -> Result<(), sqlx::Error> {
            let admin_pool = PgPoolOptions::new()
                .max_connections(1)
                .connect_with(admin_options)
                .await?;

            let drop_force = format!("DROP DATABASE \"{}\" WITH (FORCE)", database_name);
            match sqlx::query(&drop_force).execute(&admin_pool).await {
                Ok(_) => Ok(()),
                Err(err) if force_drop_unsupported(&err) => {
                    let drop_sql = format!("DROP DATABASE \"{}\"", database_name);
                    sqlx::query(&drop_sql).execute(&admin_pool).await?;
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }

        fn force_drop_unsupported(err: &sqlx::Error) -> bool {
            matches!(
                err,
                sqlx::Error::Database(db_err)
                    if db_err
                        .code()
                        .map(|code| code == "42601" || code == "0A000")
                        .unwrap_or(false)
            )
        }

        impl Drop for TestDatabase {
            fn drop(&mut self) {
                if let Some(pool) = self.pool.take() {
                    let admin_options = self.admin_options.clone();
                    let db_name = self.database_name.clone();
                    if let Ok(handle) = Handle::try_current() {
                        handle.spawn(async move {
                            pool.close().await;
                            let _ = drop_database_with_fallback(admin_options, &db_name).await;
                        });
                    }
                }

                if let Some(container) = self.container.take() {
                    drop(container);
                }
            }
        }
    }

    /// Builder for constructing Rocket instances tailored for integration tests.
    #[derive(Default)]
    pub struct TestRocketBuilder {
        figment: Figment,
        mounts: Vec<(String, Vec<Route>)>,
        contact_store: Option<SharedContactStore>,
        import_config: Option<ImportConfig>,
    }

    impl TestRocketBuilder {
        /// Start a builder with sensible defaults: random port, logging disabled.
        pub fn new() -> Self {
            let figment = rocket::Config::figment()
                .merge(("port", 0))
                .merge(("log_level", LogLevel::Off))
                .merge(("cli_colors", false));

            Self {
                figment,
                ..Default::default()
            }
        }

        /// Mount routes under `/api/v1`.
        pub fn mount_api_routes(mut self, routes: Vec<Route>) -> Self {
            self.mounts.push(("/api/v1".to_string(), routes));
            self
        }

        /// Manage the contact store used by contact and import routes.
        pub fn manage_contact_store(mut self, store: SharedContactStore) -> Self {
            self.contact_store = Some(store);
            self
        }

        pub fn manage_import_config(mut self, config: ImportConfig) -> Self {
            self.import_config = Some(config);
            self
        }

        /// Finish building the Rocket instance.
        pub fn build(self) -> Rocket<Build> {
            let mut rocket = rocket::custom(self.figment)
                .manage(self.import_config.unwrap_or_default());

            for (base, routes) in self.mounts {
                rocket = rocket.mount(base, routes);
            }

            if let Some(store) = self.contact_store {
                rocket = rocket.manage(store);
            }

            rocket
        }

        /// Convenience helper to produce a blocking local client.
        pub fn blocking_client(self) -> Client {
            Client::tracked(self.build()).expect("valid Rocket instance")
        }

    }

    /// Shared in-memory store, returned together with its trait-object handle.
    pub fn memory_store() -> (Arc<MemoryContactStore>, SharedContactStore) {
        let store = Arc::new(MemoryContactStore::default());
        let shared: SharedContactStore = store.clone();
        (store, shared)
    }
}
