//! Motorcycle Form Component
//!
//! Create/edit form bound to the catalog draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_catalog;
use crate::models::{parse_price_input, price_input_resync, price_input_text, DraftField};
use crate::store::{form_mode, CatalogStateStoreFields, FormMode};

/// Form for adding a motorcycle, or editing the one picked in the table
#[component]
pub fn MotorcycleForm() -> impl IntoView {
    let catalog = StoredValue::new(use_catalog());
    let store = catalog.with_value(|c| *c.state());

    let mode = move || store.editing_id().with(form_mode);
    let set_field = move |field: DraftField| catalog.with_value(|c| c.set_field(field));

    // Raw price text; the draft only holds the coerced number
    let (price_text, set_price_text) =
        signal(store.draft().with_untracked(|d| price_input_text(d.price)));
    Effect::new(move |_| {
        let price = store.draft().with(|d| d.price);
        if let Some(text) = price_text.with_untracked(|current| price_input_resync(current, price)) {
            set_price_text.set(text);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let catalog = catalog.get_value();
        spawn_local(async move {
            catalog.submit().await;
        });
    };

    view! {
        <form class="motorcycle-form" on:submit=on_submit>
            <h2>
                {move || match mode() {
                    FormMode::Create => "เพิ่มข้อมูลใหม่",
                    FormMode::Update => "แก้ไขข้อมูล",
                }}
            </h2>

            <input
                type="text"
                placeholder="ชื่อรุ่น"
                required=true
                prop:value=move || store.draft().with(|d| d.name.clone())
                on:input=move |ev| set_field(DraftField::Name(event_target_value(&ev)))
            />
            <input
                type="text"
                placeholder="ยี่ห้อ"
                required=true
                prop:value=move || store.draft().with(|d| d.brand.clone())
                on:input=move |ev| set_field(DraftField::Brand(event_target_value(&ev)))
            />
            <input
                type="number"
                placeholder="ราคา"
                required=true
                prop:value=price_text
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    set_field(DraftField::Price(parse_price_input(&raw)));
                    set_price_text.set(raw);
                }
            />
            <input
                type="text"
                placeholder="ลิงก์รูปภาพ"
                prop:value=move || store.draft().with(|d| d.image_url.clone())
                on:input=move |ev| set_field(DraftField::Image(event_target_value(&ev)))
            />
            <label class="available-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || store.draft().with(|d| d.available)
                    on:change=move |ev| set_field(DraftField::Available(event_target_checked(&ev)))
                />
                "มีสินค้า"
            </label>

            <button type="submit" class="submit-btn">
                {move || match mode() {
                    FormMode::Create => "เพิ่มข้อมูล",
                    FormMode::Update => "บันทึกการแก้ไข",
                }}
            </button>
        </form>
    }
}
