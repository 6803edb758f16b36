//! Server startup

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the server from a loaded configuration and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting employee management service");

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   POST   /api/auth/register - Register");
    info!("   POST   /api/auth/login - Login");
    info!("   GET    /api/employees - Paged employee list");
    info!("   GET    /api/employees/{{id}} - Employee by id");
    info!("   GET    /api/employees/department/{{department}} - Employees by department");
    info!("   POST   /api/employees - Create employee");
    info!("   PUT    /api/employees/{{id}} - Update employee");
    info!("   DELETE /api/employees/{{id}} - Delete employee");
    if config.auth().protect_employee_routes {
        info!("Employee routes require a bearer token");
    }

    server.start().await
}
