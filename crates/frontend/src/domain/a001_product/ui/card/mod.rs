//! Flip card for one product.

use crate::layout::global_context::use_site_context;
use crate::shared::components::card_animated::entrance_style;
use crate::shared::dom;
use contracts::domain::a001_product::{CardImage, CardModel};
use contracts::shared::flip::{click_flips, FlipCard};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use std::time::Duration;

#[component]
pub fn ProductCard(card: CardModel) -> impl IntoView {
    let ctx = use_site_context();
    let (revert_ms, max_width, entrance_ms) = ctx.config.with_value(|c| {
        (
            c.cards.flip_revert_ms,
            c.cards.flip_max_width,
            c.cards.entrance_ms,
        )
    });

    let flip = RwSignal::new(FlipCard::default());
    let expanded = move || flip.with(|f| f.is_expanded());

    // The card may be gone by the time the revert fires; `try_update` tolerates that.
    let toggle = move || {
        if let Some(ticket) = flip.try_update(|f| f.toggle()).flatten() {
            set_timeout(
                move || {
                    flip.try_update(|f| f.revert(ticket));
                },
                Duration::from_millis(u64::from(revert_ms)),
            );
        }
    };

    let on_click = move |_: MouseEvent| {
        if dom::viewport_width().is_some_and(|w| click_flips(w, max_width)) {
            toggle();
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            toggle();
        }
    };

    let entered = RwSignal::new(false);
    set_timeout(
        move || {
            entered.try_set(true);
        },
        Duration::from_millis(u64::from(card.delay_ms)),
    );
    let style = move || entrance_style(entrance_ms, entered.get());
    let aria_label = card.aria_label();
    let footnote = card.footnote();
    let price = card.price_label.clone();
    let image = image_view(&card.image, card.name, price.clone());

    view! {
        <div class="col-sm-6 col-md-4 col-lg-3">
            <div
                class="flip-card"
                class:active=expanded
                tabindex="0"
                data-id=card.id.to_string()
                aria-label=aria_label
                style=style
                on:click=on_click
                on:keydown=on_keydown
            >
                <div class="flip-inner">
                    <div class="flip-front">
                        {image}
                        <div class="card-caption">
                            <div class="d-flex justify-content-between align-items-center">
                                <div>
                                    <h5 class="mb-0">{card.name}</h5>
                                    <small class="text-muted">{card.category}</small>
                                </div>
                                <div class="text-end">
                                    <div class="price-now visually-hidden">{price}</div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="flip-back" aria-hidden=move || (!expanded()).to_string()>
                        <h6 class="mb-1">{card.name}</h6>
                        <p class="small mb-1">{card.description}</p>
                        <ul class="flip-points">
                            {card.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                        </ul>
                        <div class="small text-muted mt-2">{footnote}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn image_view(image: &CardImage, name: &'static str, price: String) -> AnyView {
    match image {
        CardImage::Asset(uri) => {
            let uri = *uri;
            view! {
                <div class="flip-img-wrap" style=format!("background-image:url('{uri}');")>
                    <img src=uri alt=name class="cover" />
                    <div class="price-pill">{price}</div>
                </div>
            }
            .into_any()
        }
        CardImage::Initials(text) => view! {
            <div class="flip-img-wrap flip-img-placeholder" role="img" aria-label=name>
                <span class="placeholder-initials">{text.clone()}</span>
                <div class="price-pill">{price}</div>
            </div>
        }
        .into_any(),
    }
}
