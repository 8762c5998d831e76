use mongodb::{Client, Database};

/// Opens the process-wide client and hands back the service database.
///
/// The client is returned alongside the database so the caller can shut it
/// down explicitly once the server loop exits.
pub async fn connect(uri: &str, db_name: &str) -> mongodb::error::Result<(Client, Database)> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(db_name);
    Ok((client, db))
}
