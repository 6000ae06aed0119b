use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub visible: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class={classes!("site-header", props.visible.then(|| "visible"))}>
            <style>{HEADER_CSS}</style>
            <a href="/" class="header-logo">
                <img src="assets/dqnlogo.svg" alt="DQN ANIME" />
            </a>
            <nav class="header-links">
                <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"TWITTER"}</a>
                <a href="https://youtube.com" target="_blank" rel="noopener noreferrer">{"YOUTUBE"}</a>
            </nav>
        </header>
    }
}

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0.75rem 1.5rem;
        background: rgba(0, 0, 0, 0.85);
        border-bottom: 1px solid #222;
        transform: translateY(-100%);
        opacity: 0;
        transition: transform 0.3s ease, opacity 0.3s ease;
        pointer-events: none;
    }
    .site-header.visible {
        transform: translateY(0);
        opacity: 1;
        pointer-events: auto;
    }
    .header-logo img {
        height: 32px;
    }
    .header-links {
        display: flex;
        gap: 1.5rem;
    }
    .header-links a {
        color: #9ca3af;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
        text-decoration: none;
    }
    .header-links a:hover {
        color: #ff2d55;
    }
"#;
