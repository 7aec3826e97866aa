//! Slippy map for picking a single point.
//!
//! Raster tiles are laid out from [`Viewport`]; a left click (press and
//! release without moving more than [`DRAG_THRESHOLD`]) selects a point,
//! anything longer pans the map.

use contracts::shared::geo::mercator::Viewport;
use contracts::shared::geo::LatLng;
use leptos::html::Div;
use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::icons::icon;

/// Movement below this many pixels between press and release is a click
const DRAG_THRESHOLD: f64 = 3.0;

/// Size used until the container has been measured
const FALLBACK_WIDTH: f64 = 600.0;
const FALLBACK_HEIGHT: f64 = 350.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start_x: f64,
    start_y: f64,
    start_center: LatLng,
    moved: bool,
}

#[component]
pub fn MapPicker(
    /// Map center; the map recenters whenever it changes
    #[prop(into)]
    center: Signal<LatLng>,
    /// Currently selected point, drawn as a marker
    #[prop(into)]
    selected: Signal<Option<LatLng>>,
    /// Called with the clicked position
    on_select: Callback<LatLng>,
) -> impl IntoView {
    let config = use_config();
    let tile_url = StoredValue::new(config.tile_url.clone());
    let subdomains = StoredValue::new(config.tile_subdomains.clone());

    let container = NodeRef::<Div>::new();
    let viewport = RwSignal::new(Viewport::new(
        center.get_untracked(),
        config.default_zoom,
        FALLBACK_WIDTH,
        FALLBACK_HEIGHT,
    ));
    let drag = RwSignal::new(Option::<DragState>::None);

    Effect::new(move |_| {
        let c = center.get();
        viewport.update(|v| v.center = c);
    });

    Effect::new(move |_| {
        if let Some(el) = container.get() {
            let rect = el.get_bounding_client_rect();
            if rect.width() > 0.0 && rect.height() > 0.0 {
                viewport.update(|v| v.resize(rect.width(), rect.height()));
            }
        }
    });

    let tiles = Memo::new(move |_| viewport.with(|v| v.visible_tiles()));

    // client coordinates -> container-relative
    let local_point = move |ev: &leptos::ev::MouseEvent| -> Option<(f64, f64)> {
        let rect = container.get_untracked()?.get_bounding_client_rect();
        Some((
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
        ))
    };

    let on_mousedown = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        drag.set(Some(DragState {
            start_x: ev.client_x() as f64,
            start_y: ev.client_y() as f64,
            start_center: viewport.with_untracked(|v| v.center),
            moved: false,
        }));
    };

    let on_mousemove = move |ev: leptos::ev::MouseEvent| {
        let Some(state) = drag.get_untracked() else {
            return;
        };
        let dx = ev.client_x() as f64 - state.start_x;
        let dy = ev.client_y() as f64 - state.start_y;
        if !state.moved && dx.hypot(dy) < DRAG_THRESHOLD {
            return;
        }
        if !state.moved {
            drag.set(Some(DragState { moved: true, ..state }));
        }
        viewport.update(|v| v.center = v.center_after_drag(state.start_center, dx, dy));
    };

    let on_mouseup = move |ev: leptos::ev::MouseEvent| {
        let Some(state) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        if state.moved {
            return;
        }
        if let Some((x, y)) = local_point(&ev) {
            let position = viewport.with_untracked(|v| v.to_lat_lng(x, y));
            log::debug!("Map click at {:.6}, {:.6}", position.lat, position.lng);
            on_select.run(position);
        }
    };

    let stop = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    view! {
        <div
            class=move || if drag.with(|d| d.is_some_and(|s| s.moved)) { "map map--dragging" } else { "map" }
            node_ref=container
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseup=on_mouseup
            on:mouseleave=move |_| drag.set(None)
        >
            <For
                each=move || tiles.get()
                key=|tile| tile.key()
                children=move |tile| {
                    let src = tile_url.with_value(|t| subdomains.with_value(|s| tile.id.url(t, s)));
                    let (column, row) = (tile.column, tile.id.y);
                    let style = move || {
                        let p = viewport.with(|v| v.tile_position(column, row));
                        format!("left: {:.1}px; top: {:.1}px;", p.x, p.y)
                    };
                    view! { <img class="map__tile" src=src alt="" draggable="false" style=style /> }
                }
            />

            {move || selected.get().map(|position| {
                let p = viewport.with(|v| v.to_container(position));
                view! {
                    <div class="map__marker" style=format!("left: {:.1}px; top: {:.1}px;", p.x, p.y)>
                        {icon("map-pin")}
                    </div>
                }
            })}

            <div class="map__zoom">
                <button
                    type="button"
                    aria-label="Zoom in"
                    on:mousedown=stop
                    on:click=move |_| viewport.update(|v| { v.zoom_in(); })
                >
                    {icon("plus")}
                </button>
                <button
                    type="button"
                    aria-label="Zoom out"
                    on:mousedown=stop
                    on:click=move |_| viewport.update(|v| { v.zoom_out(); })
                >
                    {icon("minus")}
                </button>
            </div>

            <div class="map__attribution">{config.tile_attribution.clone()}</div>
        </div>
    }
}
