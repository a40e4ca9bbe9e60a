//! "Create collaboration" modal opened from the header's plus button.

use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::csrf_token;
use crate::shared::dom;
use crate::shared::modal_frame::ModalFrame;
use contracts::category::ArtworkCategory;
use leptos::prelude::*;

#[component]
pub fn CreateCollaborationModal() -> impl IntoView {
    let ctx = use_global_context();
    let on_close = Callback::new(move |_| ctx.close_create_modal());

    view! {
        <Show when=move || ctx.create_modal_open.get()>
            <ModalFrame on_close=on_close title="Create Collaboration" modal_class="modal--collaboration".to_string()>
                // the server handles the post and redirects back
                <form class="collaboration-form" method="post" action=dom::pathname()>
                    <input type="hidden" name="csrfmiddlewaretoken" value=csrf_token().unwrap_or_default() />
                    <label class="collaboration-form__field">
                        <span>"Title"</span>
                        <input type="text" name="title" required=true maxlength="200" />
                    </label>
                    <label class="collaboration-form__field">
                        <span>"Description"</span>
                        <textarea name="description" rows="4"></textarea>
                    </label>
                    <label class="collaboration-form__field">
                        <span>"Category"</span>
                        <select name="category">
                            {ArtworkCategory::all()
                                .into_iter()
                                .map(|c| view! { <option value=c.code()>{c.display_name()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="collaboration-form__actions">
                        <button type="button" class="button button--secondary" on:click=move |_| ctx.close_create_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="button button--primary">"Create"</button>
                    </div>
                </form>
            </ModalFrame>
        </Show>
    }
}
