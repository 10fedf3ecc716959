use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use realty_listings::config::EnvironmentConfig;
use realty_listings::create_app;
use realty_listings::state::AppState;
use realty_listings::store::XmlStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏠 Realty Listings - API de clasificados inmobiliarios");
    info!("======================================================");

    let config = EnvironmentConfig::from_env();
    let store = XmlStore::new(config.data_dir.clone());
    info!("📁 Directorio de datos: {}", config.data_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("👤 Usuarios:");
    info!("   POST /api/signup - Registro de usuario");
    info!("   POST /api/login - Login");
    info!("   POST /api/reset-password - Reset por teléfono");
    info!("   POST /api/users/change-password - Cambio de contraseña");
    info!("   GET  /api/users/:userID - Perfil");
    info!("   PUT  /api/users/:userID - Actualizar perfil");
    info!("   GET  /api/users - Lista (admin)");
    info!("🏠 Anuncios:");
    info!("   GET  /api/listings - Browse (?createdBy=)");
    info!("   GET  /api/listings/:id - Anuncio");
    info!("   POST /api/listings - Publicar");
    info!("   PUT  /api/listings/:id - Actualizar");
    info!("   DELETE /api/listings/:id - Borrado lógico");
    info!("   PATCH /api/listings/:id/close - Cerrar deal");
    info!("   PATCH /api/listings/:id/reopen - Reabrir");
    info!("📋 Catálogos:");
    info!("   GET  /api/property-types");
    info!("   GET  /api/listing-types");
    info!("   GET  /api/property-subtypes");
    info!("💬 Otros:");
    info!("   POST /api/feedback - Enviar feedback");
    info!("   GET  /api/feedback - Leer feedback (admin)");
    info!("   POST /api/link-hits - Contar acción de UI");
    info!("   GET  /api/link-hits - Totales (admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
