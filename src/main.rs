use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;

use activity_signup::registry::ActivityRegistry;
use activity_signup::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Seed the registry. The full data set is rebuilt from the fixed
    //    table on every start; there is nothing to load.
    let registry = Arc::new(ActivityRegistry::with_seed_roster());

    // 3. Build the application
    let app = web::app(registry);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running on http://{}", bound_addr);
    println!("📍 Activities live at http://{}/activities", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
