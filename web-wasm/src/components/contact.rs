//! 問い合わせセクション
//!
//! 送信時に mailto URI を組み立て、既定のメーラーに渡す。

use leptos::prelude::*;
use portfolio_common::ContactMessage;

#[component]
pub fn ContactSection(
    availability: String,
    highlights: Vec<String>,
    recipient: String,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage::new(name.get(), email.get(), message.get());
        if let Err(e) = msg.validate() {
            set_notice.set(Some(e.to_string()));
            return;
        }
        set_notice.set(None);

        let uri = msg.mailto_uri(&recipient);
        if let Err(e) = window().open_with_url(&uri) {
            gloo::console::warn!(format!("mailto handoff failed: {:?}", e));
        }
    };

    view! {
        <section id="contact" class="contact">
            <div class="contact-grid">
                <div>
                    <h3>"Get in touch"</h3>
                    <p class="text-muted">{availability}</p>
                    <ul class="highlights">
                        {highlights
                            .into_iter()
                            .map(|h| view! { <li>{h}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <form class="contact-form" on:submit=on_submit>
                    <input
                        name="name"
                        placeholder="Your name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        name="email"
                        type="email"
                        placeholder="Your email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <textarea
                        name="message"
                        placeholder="Message"
                        rows="5"
                        required
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    {move || notice.get().map(|n| view! { <p class="form-notice">{n}</p> })}
                    <button type="submit" class="btn btn-primary">"Send"</button>
                </form>
            </div>
        </section>
    }
}
