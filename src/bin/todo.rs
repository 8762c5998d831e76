use task_services::{config::Config, db, routes, state::AppState};

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    let (client, database) = db::connect(&config.mongodb_uri, "todolist")
        .await
        .expect("Error connecting DB");

    let state = AppState { db: database };

    let app = routes::todo_routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await.unwrap();

    println!("todo is chilling at http://{}", config.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    client.shutdown().await;
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
}
