use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{window, AddEventListenerOptions, Element, HtmlElement};
use yew::prelude::*;

use crate::carousel::controller::{CarouselController, CarouselView, Deferred, Schedule};
use crate::carousel::geometry::{DisplayMode, ItemBox, SectionGeometry, ViewportMetrics};
use crate::carousel::surface::ScrollSurface;
use crate::config::{self, CarouselConfig};
use crate::data::characters::Character;
use crate::effects::flicker::FlickerFrames;

/// Browser side of the carousel: the section wrapper and the scrolling track.
#[derive(Clone)]
struct DomSurface {
    section: NodeRef,
    track: NodeRef,
}

impl ScrollSurface for DomSurface {
    fn window_width(&self) -> Option<f64> {
        window()?.inner_width().ok()?.as_f64()
    }

    fn page_scroll_y(&self) -> Option<f64> {
        window()?.scroll_y().ok()
    }

    fn section_geometry(&self) -> Option<SectionGeometry> {
        let window = window()?;
        let section = self.section.cast::<HtmlElement>()?;
        let track = self.track.cast::<HtmlElement>()?;
        let scroll_y = window.scroll_y().ok()?;
        Some(SectionGeometry {
            top: section.get_bounding_client_rect().top() + scroll_y,
            height: f64::from(section.offset_height()),
            viewport_height: window.inner_height().ok()?.as_f64()?,
            pinned_height: f64::from(track.offset_height()),
        })
    }

    fn viewport_metrics(&self) -> Option<ViewportMetrics> {
        let track = self.track.cast::<Element>()?;
        Some(ViewportMetrics {
            container_width: f64::from(track.client_width()),
            scrollable_width: f64::from(track.scroll_width()),
            window_width: self.window_width().unwrap_or(0.0),
        })
    }

    fn track_scroll_left(&self) -> Option<f64> {
        let track = self.track.cast::<Element>()?;
        Some(f64::from(track.scroll_left()))
    }

    fn item_boxes(&self) -> Option<Vec<ItemBox>> {
        let row = self.track.cast::<Element>()?.first_element_child()?;
        let cards = row.children();
        let boxes = (0..cards.length())
            .filter_map(|i| cards.item(i))
            .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
            .map(|card| ItemBox::new(f64::from(card.offset_left()), f64::from(card.offset_width())))
            .collect();
        Some(boxes)
    }

    fn set_track_scroll_left(&mut self, left: f64) {
        if let Some(track) = self.track.cast::<Element>() {
            let top = f64::from(track.scroll_top());
            track.scroll_to_with_x_and_y(left, top);
        }
    }
}

#[derive(Default)]
struct Timers {
    resolve: Option<Timeout>,
    release: Option<Timeout>,
}

/// Everything an event handler needs to drive the controller and re-render.
#[derive(Clone)]
struct CarouselHandle {
    controller: Rc<RefCell<CarouselController>>,
    timers: Rc<RefCell<Timers>>,
    surface: DomSurface,
    view: UseStateHandle<CarouselView>,
}

impl CarouselHandle {
    /// Runs `f` against a live controller and publishes the resulting view.
    /// Once unmounted nothing runs and nothing is published.
    fn apply<T>(&self, f: impl FnOnce(&mut CarouselController, &mut DomSurface) -> T) -> Option<T> {
        let mut surface = self.surface.clone();
        let (out, view) = {
            let mut controller = self.controller.borrow_mut();
            if !controller.is_mounted() {
                return None;
            }
            let out = f(&mut controller, &mut surface);
            (out, controller.view())
        };
        self.view.set(view);
        Some(out)
    }

    /// Starts (or restarts) the timer for a deferred task. Replacing the slot
    /// drops the previous timeout, which cancels it.
    fn arm(&self, schedule: Schedule) {
        let handle = self.clone();
        let timeout = Timeout::new(schedule.delay_ms, move || {
            handle.apply(|controller, surface| {
                controller.run_deferred(schedule, surface, config::now_ms())
            });
        });
        let mut timers = self.timers.borrow_mut();
        match schedule.task {
            Deferred::ResolveMobileActive => timers.resolve = Some(timeout),
            Deferred::ReleaseOverride => timers.release = Some(timeout),
        }
    }

    fn arm_if(&self, schedule: Option<Schedule>) {
        if let Some(schedule) = schedule {
            self.arm(schedule);
        }
    }
}

fn passive() -> AddEventListenerOptions {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    options
}

#[derive(Properties, PartialEq)]
pub struct CharacterScrollProps {
    pub characters: Rc<[Character]>,
}

#[function_component(CharacterScroll)]
pub fn character_scroll(props: &CharacterScrollProps) -> Html {
    let characters = props.characters.clone();
    let section_ref = use_node_ref();
    let track_ref = use_node_ref();

    let item_count = characters.len();
    let controller = use_mut_ref(|| CarouselController::new(CarouselConfig::default(), item_count));
    let timers = use_mut_ref(Timers::default);
    let view = {
        let controller = controller.clone();
        use_state_eq(move || controller.borrow().view())
    };

    let handle = CarouselHandle {
        controller: controller.clone(),
        timers,
        surface: DomSurface {
            section: section_ref.clone(),
            track: track_ref.clone(),
        },
        view: view.clone(),
    };

    {
        let handle = handle.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let track = track_ref.cast::<Element>();

                {
                    let mut surface = handle.surface.clone();
                    let schedule = handle
                        .controller
                        .borrow_mut()
                        .mount(&mut surface, config::now_ms());
                    handle.view.set(handle.controller.borrow().view());
                    if let Some(schedule) = schedule {
                        handle.arm(schedule);
                    }
                }

                let on_page_scroll = {
                    let handle = handle.clone();
                    Closure::wrap(Box::new(move || {
                        handle.apply(|controller, surface| {
                            controller.on_page_scroll(surface, config::now_ms())
                        });
                    }) as Box<dyn FnMut()>)
                };

                let on_resize = {
                    let handle = handle.clone();
                    Closure::wrap(Box::new(move || {
                        let schedule = handle.apply(|controller, surface| {
                            controller.on_resize(surface, config::now_ms())
                        });
                        handle.arm_if(schedule.flatten());
                    }) as Box<dyn FnMut()>)
                };

                let on_track_scroll = {
                    let handle = handle.clone();
                    Closure::wrap(Box::new(move || {
                        let schedule = handle.apply(|controller, surface| {
                            controller.on_track_scroll(surface, config::now_ms())
                        });
                        handle.arm_if(schedule.flatten());
                    }) as Box<dyn FnMut()>)
                };

                let options = passive();
                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_page_scroll.as_ref().unchecked_ref(),
                        &options,
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }
                if let Some(track) = track.as_ref() {
                    let _ = track.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_track_scroll.as_ref().unchecked_ref(),
                        &options,
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_page_scroll.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(track) = track {
                        let _ = track.remove_event_listener_with_callback(
                            "scroll",
                            on_track_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    handle.controller.borrow_mut().unmount();
                    let mut timers = handle.timers.borrow_mut();
                    timers.resolve.take();
                    timers.release.take();
                }
            },
            (),
        );
    }

    // Card widths differ between layouts, so measure again once the new
    // layout is on screen.
    {
        let handle = handle.clone();
        use_effect_with_deps(
            move |_| {
                let schedule = handle.apply(|controller, surface| {
                    controller.on_resize(surface, config::now_ms())
                });
                handle.arm_if(schedule.flatten());
                || ()
            },
            view.mode,
        );
    }

    let on_hover = {
        let handle = handle.clone();
        Callback::from(move |index: usize| {
            handle.apply(|controller, _| controller.on_card_hover(index));
        })
    };

    let view = *view;
    let is_mobile = view.mode == DisplayMode::Mobile;
    let pinned = view.is_pinned && !is_mobile;
    let active = characters.get(view.active_index);

    let section_class = classes!(
        "character-section",
        if is_mobile { "mobile" } else { "desktop" }
    );
    let header_class = classes!("character-header", pinned.then(|| "pinned"));
    let track_class = classes!(
        "character-track",
        if is_mobile { "mobile" } else { "desktop" },
        pinned.then(|| "pinned"),
        view.manual_override_active.then(|| "manual"),
    );

    html! {
        <div ref={section_ref} class={section_class}>
            <style>{CAROUSEL_CSS}</style>
            <TopLight pinned={pinned} />

            <div class={header_class}>
                <h2 class="character-heading">
                    <span class="accent">{"CAST"}</span>{" OF CHARACTERS"}
                </h2>
                <div class="character-details">
                    {
                        if let Some(character) = active {
                            html! {
                                <>
                                    <h3 class="character-name">{character.name}</h3>
                                    <div class="character-subtitle">{character.subtitle}</div>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>

            if pinned {
                <div class="header-spacer"></div>
            }

            <div ref={track_ref} class={track_class}>
                <div class="character-row">
                    {
                        characters.iter().enumerate().map(|(index, character)| {
                            let is_active = !is_mobile && index == view.active_index;
                            let onmouseenter = (!is_mobile).then(|| {
                                let on_hover = on_hover.clone();
                                Callback::from(move |_: MouseEvent| on_hover.emit(index))
                            });
                            html! {
                                <div
                                    key={character.id}
                                    class={classes!("character-card", is_active.then(|| "active"))}
                                    onmouseenter={onmouseenter}
                                >
                                    <div class="card-image">
                                        <img src={character.image_url} alt={character.name} loading="lazy" />
                                        <div class="card-shade"></div>
                                        if is_active {
                                            <div class="card-scanline"></div>
                                        }
                                    </div>
                                    <div class="card-info">
                                        <h3>{character.name}</h3>
                                        <div class="card-subtitle">{character.subtitle}</div>
                                        <div class="card-title">{character.title}</div>
                                        <div class="card-bar">
                                            <div class="card-bar-fill"></div>
                                        </div>
                                        <div class="card-level">{character.level}</div>
                                    </div>
                                    <span class="corner tl"></span>
                                    <span class="corner tr"></span>
                                    <span class="corner bl"></span>
                                    <span class="corner br"></span>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            if pinned {
                <div class="track-spacer"></div>
            }

            if view.completed && !is_mobile {
                <div class="scroll-complete" aria-hidden="true"></div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TopLightProps {
    pinned: bool,
}

type FrameSource = FlickerFrames<Box<dyn FnMut() -> f64>>;

#[function_component(TopLight)]
fn top_light(props: &TopLightProps) -> Html {
    // Tick keeps the effect firing even if two frames compare equal.
    let frames = use_mut_ref(|| -> FrameSource {
        let random: Box<dyn FnMut() -> f64> = Box::new(Math::random);
        FlickerFrames::new(random)
    });
    let light = {
        let frames = frames.clone();
        use_state(move || (0u64, frames.borrow_mut().next().unwrap_or_default()))
    };

    {
        let light = light.clone();
        let (tick, frame) = *light;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(frame.duration_ms, move || {
                    if let Some(next) = frames.borrow_mut().next() {
                        light.set((tick + 1, next));
                    }
                });
                move || drop(timeout)
            },
            tick,
        );
    }

    let (_, frame) = *light;
    let glow = frame.glow_opacity();
    let style = format!(
        "background: linear-gradient(to bottom, rgba(200, 0, 0, {}) 0%, transparent 80%); filter: blur({}px); opacity: {};",
        glow,
        frame.blur_px(),
        if glow > 0.0 { 1 } else { 0 },
    );

    html! {
        <div class={classes!("top-light", props.pinned.then(|| "pinned"))} style={style}></div>
    }
}

const CAROUSEL_CSS: &str = r#"
    .character-section {
        position: relative;
        padding-top: 1rem;
        background: #000;
    }
    .character-section.desktop {
        min-height: 250vh;
        margin-bottom: 9.5rem;
    }
    .character-section.mobile {
        margin-bottom: 3rem;
    }
    .top-light {
        position: absolute;
        top: 0;
        left: 0;
        right: 0;
        height: 250px;
        pointer-events: none;
        z-index: 10;
        transition: opacity 0.1s ease-out, filter 0.1s ease-out;
    }
    .top-light.pinned {
        position: fixed;
    }
    .character-header {
        position: relative;
        z-index: 30;
    }
    .character-header.pinned {
        position: fixed;
        top: 1.25rem;
        left: 0;
        right: 0;
    }
    .character-heading {
        font-size: 3.75rem;
        font-weight: 700;
        text-align: center;
        padding: 0 1rem;
        color: #fff;
    }
    .accent {
        color: #ff2d55;
    }
    .character-details {
        max-width: 48rem;
        margin: 0 auto;
        padding: 0 1rem;
        text-align: center;
        min-height: 100px;
        animation: detailsIn 0.5s ease;
    }
    .character-name {
        font-size: 1.875rem;
        color: #fff;
        margin-bottom: 0.5rem;
    }
    .character-subtitle {
        color: #ff2d55;
        font-size: 1.125rem;
    }
    @keyframes detailsIn {
        from { opacity: 0; transform: translateY(10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .header-spacer {
        height: 380px;
    }
    .track-spacer {
        height: 72vh;
    }
    .character-track {
        overflow-x: auto;
        scrollbar-width: none;
        z-index: 20;
        position: relative;
    }
    .character-track::-webkit-scrollbar {
        display: none;
    }
    .character-track.desktop {
        height: 72vh;
        margin-top: 4rem;
        padding-bottom: 48px;
        scroll-behavior: auto;
        scroll-snap-type: none;
    }
    .character-track.mobile {
        margin-top: 2rem;
        scroll-behavior: smooth;
        scroll-snap-type: x mandatory;
    }
    .character-track.pinned {
        position: fixed;
        top: 240px;
        left: 0;
        right: 0;
        margin-top: 0;
    }
    .character-row {
        display: flex;
        gap: 1rem;
        padding: 0 2rem;
        min-width: max-content;
        align-items: stretch;
    }
    .character-track.mobile .character-row {
        padding: 0 1rem;
        align-items: center;
    }
    .character-card {
        position: relative;
        flex-shrink: 0;
        width: 120px;
        border: 2px solid #333;
        border-radius: 6px;
        overflow: hidden;
        cursor: pointer;
        background: #0d0d12;
        scroll-snap-align: start;
        scroll-margin-left: 2rem;
        transition: width 0.35s cubic-bezier(0.2, 0.9, 0.3, 1), box-shadow 0.35s ease;
    }
    .character-card.active {
        width: 400px;
        border-color: #ff2d55;
        box-shadow: 0 0 35px 10px rgba(255, 45, 85, 0.5);
    }
    .character-track.mobile .character-card {
        width: 320px;
        scroll-margin-left: 1rem;
    }
    .card-image {
        position: relative;
        height: 420px;
        overflow: hidden;
        background: #000;
    }
    .character-track.mobile .card-image {
        height: 480px;
    }
    .card-image img {
        position: absolute;
        top: 50%;
        left: 10%;
        height: 90%;
        width: auto;
        transform: translate(-50%, -50%);
        filter: grayscale(1) brightness(1.2) contrast(1.1);
    }
    .character-card.active .card-image img {
        left: 72%;
        max-width: 200px;
        filter: none;
    }
    .character-track.mobile .card-image img {
        left: 50%;
        height: 85%;
        filter: none;
    }
    .card-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, #0d0d12, transparent);
        opacity: 0.4;
    }
    .character-card.active .card-shade {
        opacity: 0.6;
    }
    .card-scanline {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 1.5rem;
        background: rgba(255, 45, 85, 0.2);
        animation: scan 2s linear infinite;
    }
    @keyframes scan {
        from { transform: translateY(-10px); }
        to { transform: translateY(500px); }
    }
    .card-info {
        position: absolute;
        bottom: 0;
        left: 0;
        width: 100%;
        padding: 1rem;
        box-sizing: border-box;
        z-index: 30;
        opacity: 0.6;
    }
    .character-card.active .card-info,
    .character-track.mobile .card-info {
        opacity: 1;
    }
    .card-info h3 {
        color: #fff;
        font-size: 1.5rem;
        margin: 0 0 0.25rem;
        white-space: nowrap;
        overflow: hidden;
        text-overflow: ellipsis;
    }
    .card-subtitle {
        color: #ff2d55;
        font-size: 0.875rem;
    }
    .card-title,
    .card-level {
        color: #9ca3af;
        font-size: 0.75rem;
    }
    .card-bar {
        margin-top: 1rem;
        height: 4px;
        border-radius: 9999px;
        background: #0d0d12;
        overflow: hidden;
    }
    .card-bar-fill {
        height: 100%;
        width: 30%;
        background: #ff2d55;
        transition: width 1s ease-out;
    }
    .character-card.active .card-bar-fill {
        width: 100%;
    }
    .corner {
        position: absolute;
        width: 1.5rem;
        height: 1.5rem;
        border-color: #ff2d55;
        border-style: solid;
        border-width: 0;
        z-index: 40;
    }
    .corner.tl { top: 0; left: 0; border-top-width: 2px; border-left-width: 2px; }
    .corner.tr { top: 0; right: 0; border-top-width: 2px; border-right-width: 2px; }
    .corner.bl { bottom: 0; left: 0; border-bottom-width: 2px; border-left-width: 2px; }
    .corner.br { bottom: 0; right: 0; border-bottom-width: 2px; border-right-width: 2px; }
    .scroll-complete {
        position: fixed;
        bottom: 4rem;
        left: 0;
        width: 100%;
        z-index: 30;
    }
    @media (max-width: 767px) {
        .character-heading {
            font-size: 2.25rem;
            margin-bottom: 1rem;
        }
        .character-name {
            font-size: 1.5rem;
        }
    }
"#;
