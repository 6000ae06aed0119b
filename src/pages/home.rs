use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::character_scroll::CharacterScroll;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::team::TeamSection;
use crate::components::world::WorldSection;
use crate::data::characters::{characters, Character};
use crate::data::team::{team_members, TeamMember};

#[function_component(Home)]
pub fn home() -> Html {
    let characters = use_memo(|_| Rc::<[Character]>::from(characters()), ());
    let members = use_memo(|_| Rc::<[TeamMember]>::from(team_members()), ());
    let world_ref = use_node_ref();
    let show_header = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The header appears once the world section reaches the top of the viewport.
    {
        let world_ref = world_ref.clone();
        let show_header = show_header.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(world) = world_ref.cast::<Element>() {
                    let visible = world.get_bounding_client_rect().top() <= 0.0;
                    if visible != *show_header {
                        debug!("header visible: {}", visible);
                    }
                    show_header.set(visible);
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    html! {
        <div class="home">
            <style>{PAGE_CSS}</style>
            <Header visible={*show_header} />
            <Hero />
            <div class="character-wrapper">
                <CharacterScroll characters={(*characters).clone()} />
            </div>
            <div class="world-wrapper">
                <WorldSection section_ref={world_ref} />
            </div>
            <TeamSection members={(*members).clone()} />
            <Footer />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        background: #000;
        color: #fff;
        font-family: 'Share Tech Mono', monospace;
    }
    .home {
        position: relative;
        min-height: 100vh;
        overflow-x: hidden;
        background: #000;
    }
    .accent {
        color: #ff2d55;
    }
    .character-wrapper {
        padding-bottom: 5rem;
    }
    .world-wrapper {
        padding-top: 5rem;
    }
"#;
