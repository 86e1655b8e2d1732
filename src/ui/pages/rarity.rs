use dioxus::prelude::*;
use tracing::error;

use crate::{
    domain::ClothRow,
    infra::{QueryResponse, RowStoreClient},
    ui::{components::ClothTable, theme},
};

#[component]
pub fn RarityPage() -> Element {
    let rows = use_signal(Vec::<ClothRow>::new);

    // Fires once per mount; nothing it reads is reactive.
    let _load = use_resource(move || async move { load_cloth_rows(rows).await });

    rsx! {
        div {
            class: "p-6",
            h1 { class: "{theme::TABLE_TITLE}", "Ability values by rarity" }
            ClothTable { rows: rows() }
        }
    }
}

/// Replaces `rows` with the store's contents. Failures are logged and leave `rows` untouched.
async fn load_cloth_rows(mut rows: Signal<Vec<ClothRow>>) {
    let client = match RowStoreClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            error!(%err, "failed to initialise row store client");
            return;
        }
    };

    if let Some(data) = rows_to_show(client.fetch_cloth_rows().await) {
        rows.set(data);
    }
}

/// Rows that should replace the table, or `None` (after logging) when the query failed.
fn rows_to_show(response: QueryResponse<Vec<ClothRow>>) -> Option<Vec<ClothRow>> {
    match response.into_result() {
        Ok(data) => Some(data),
        Err(err) => {
            error!(error = %err, code = ?err.code, status = ?err.status, "failed to load cloth rows");
            None
        }
    }
}
