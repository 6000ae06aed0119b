use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    // Browsers block autoplay with sound, so start muted and let the visitor opt in.
    let muted = use_state(|| true);
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |muted| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(*muted);
                    if !*muted {
                        let _ = video.play();
                    }
                }
                || ()
            },
            *muted,
        );
    }

    let toggle_sound = {
        let muted = muted.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            muted.set(!*muted);
        })
    };

    html! {
        <section class="hero">
            <style>{HERO_CSS}</style>
            <video
                ref={video_ref}
                class="hero-video"
                preload="auto"
                autoplay=true
                loop=true
                muted={*muted}
                playsinline=true
                oncontextmenu={Callback::from(|e: MouseEvent| e.prevent_default())}
            >
                <source src="/assets/dqnteaser.mp4" type="video/mp4" />
            </video>
            <div class="hero-overlay">
                <h1 class="hero-title">{"DQN "}<span class="accent">{"ANIME"}</span></h1>
                <p class="hero-tagline">{"THE CURE FOR PAIN IS IN THE PAIN"}</p>
            </div>
            <button
                class="sound-toggle"
                onclick={toggle_sound}
                aria-label={if *muted { "Enable sound" } else { "Disable sound" }}
            >
                {if *muted { "SOUND OFF" } else { "SOUND ON" }}
            </button>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        height: 100vh;
        width: 100%;
        overflow: hidden;
        background: #000;
    }
    .hero-video {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        padding: 2rem;
        box-sizing: border-box;
    }
    .hero-overlay {
        position: absolute;
        left: 0;
        right: 0;
        bottom: 18%;
        text-align: center;
        pointer-events: none;
    }
    .hero-title {
        font-size: 4.5rem;
        font-weight: 700;
        color: #fff;
        letter-spacing: 0.1em;
        margin: 0;
    }
    .hero-tagline {
        color: #9ca3af;
        font-size: 0.875rem;
        letter-spacing: 0.2em;
    }
    .sound-toggle {
        position: absolute;
        bottom: 2.5rem;
        right: 2.5rem;
        z-index: 50;
        background: rgba(13, 13, 18, 0.8);
        border: 1px solid #333;
        color: #ff2d55;
        border-radius: 9999px;
        padding: 0.5rem 1rem;
        font-size: 0.75rem;
        cursor: pointer;
        transition: background 0.3s;
    }
    .sound-toggle:hover {
        background: #0d0d12;
    }
    @media (max-width: 767px) {
        .hero-title {
            font-size: 2.75rem;
        }
    }
"#;
