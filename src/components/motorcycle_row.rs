//! Motorcycle Row Component
//!
//! One table row with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_catalog;
use crate::display::{TableRow, NO_IMAGE_LABEL};

#[component]
pub fn MotorcycleRow(row: TableRow) -> impl IntoView {
    let catalog = StoredValue::new(use_catalog());
    let TableRow { display: row, motorcycle, .. } = row;
    let id = row.id.clone();
    let alt = row.name.clone();

    let on_edit = move |_| catalog.with_value(|c| c.edit(&motorcycle));

    let on_delete = move |_| {
        let Some(id) = id.clone() else {
            tracing::warn!("motorcycle without id cannot be deleted");
            return;
        };
        let catalog = catalog.get_value();
        spawn_local(async move {
            catalog.delete(&id).await;
        });
    };

    view! {
        <tr class="motorcycle-row">
            <td>
                {match row.image_url {
                    Some(src) => view! { <img class="thumbnail" src=src alt=alt /> }.into_any(),
                    None => view! { <span class="no-image">{NO_IMAGE_LABEL}</span> }.into_any(),
                }}
            </td>
            <td>{row.name}</td>
            <td>{row.brand}</td>
            <td class="price">{row.price}</td>
            <td>
                <span class=row.availability.class()>{row.availability.label()}</span>
            </td>
            <td class="actions">
                <button class="edit-btn" on:click=on_edit>"แก้ไข"</button>
                <button class="delete-btn" on:click=on_delete>"ลบ"</button>
            </td>
        </tr>
    }
}
