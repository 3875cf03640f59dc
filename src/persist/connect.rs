use super::Board;
use super::Responses;
use super::Schema;
use super::Transition;
use crate::Error;
use crate::Result;
use std::sync::Arc;
use tokio_postgres::Client;

/// Get a database connection, create missing tables, and return the client.
pub async fn db() -> Result<Arc<Client>> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").map_err(|e| Error::persist("DB_URL", e))?;
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .map_err(|e| Error::persist("connection", e))?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .map_err(|e| Error::persist("client_min_messages", e))?;
    for (name, sql) in [
        (Board::name(), Board::creates()),
        (Transition::name(), Transition::creates()),
        (Responses::name(), Responses::creates()),
    ] {
        client
            .batch_execute(sql)
            .await
            .map_err(|e| Error::persist(name, e))?;
    }
    Ok(Arc::new(client))
}
