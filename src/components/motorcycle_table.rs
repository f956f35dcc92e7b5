//! Motorcycle Table Component
//!
//! Lists every motorcycle from the last fetch, or a placeholder when empty.

use leptos::prelude::*;

use crate::components::MotorcycleRow;
use crate::context::use_catalog;
use crate::display::{shows_placeholder, table_rows, EMPTY_LIST_LABEL};
use crate::store::CatalogStateStoreFields;

#[component]
pub fn MotorcycleTable() -> impl IntoView {
    let store = *use_catalog().state();
    let motorcycles = store.motorcycles();

    view! {
        <section class="motorcycle-list">
            <h2>"รายการมอเตอร์ไซค์ทั้งหมด"</h2>
            <Show
                when=move || !motorcycles.with(|list| shows_placeholder(list))
                fallback=|| view! { <p class="empty-placeholder">{EMPTY_LIST_LABEL}</p> }
            >
                <table class="motorcycle-table">
                    <thead>
                        <tr>
                            <th>"รูป"</th>
                            <th>"ชื่อรุ่น"</th>
                            <th>"ยี่ห้อ"</th>
                            <th>"ราคา"</th>
                            <th>"สถานะ"</th>
                            <th class="actions">"จัดการ"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || motorcycles.with(|list| table_rows(list))
                            key=|row| row.key.clone()
                            children=move |row| view! { <MotorcycleRow row=row /> }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
