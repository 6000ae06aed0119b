use std::fmt;

use chrono::Datelike;
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    Empty,
    ContainsWhitespace,
    MissingAt,
    MissingLocalPart,
    InvalidDomain,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::Empty => write!(f, "ENTER AN EMAIL ADDRESS"),
            EmailError::ContainsWhitespace => write!(f, "ADDRESS CANNOT CONTAIN SPACES"),
            EmailError::MissingAt => write!(f, "ADDRESS NEEDS A SINGLE @"),
            EmailError::MissingLocalPart => write!(f, "ADDRESS NEEDS A NAME BEFORE THE @"),
            EmailError::InvalidDomain => write!(f, "ADDRESS NEEDS A VALID DOMAIN"),
        }
    }
}

/// Light sanity check before accepting a waitlist address. Returns the trimmed
/// address on success.
pub fn validate_email(input: &str) -> Result<String, EmailError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(EmailError::ContainsWhitespace);
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(EmailError::MissingAt);
    };

    if local.is_empty() {
        return Err(EmailError::MissingLocalPart);
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err(EmailError::InvalidDomain);
    }
    Ok(email.to_string())
}

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("https://twitter.com", "TWITTER"),
    ("https://youtube.com", "YOUTUBE"),
    ("https://instagram.com", "INSTAGRAM"),
];

const TICKER: &str = "THE CURE FOR PAIN IS IN THE PAIN · DQN ANIME · DIGITAL ARTIFACTS · CYBERNETIC DREAMS · NEURAL NETWORKS · GHOST IN THE MACHINE · ";

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<EmailError>);
    let subscribed = use_state(|| false);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_email(&email) {
                Ok(address) => {
                    info!("Waitlist signup: {}", address);
                    email.set(String::new());
                    error.set(None);
                    subscribed.set(true);
                }
                Err(err) => {
                    subscribed.set(false);
                    error.set(Some(err));
                }
            }
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-content">
                <div class="footer-brand">
                    <img src="assets/dqnlogo.svg" alt="Logo" class="footer-logo" />
                    <p class="footer-tagline">
                        {"disconnected since 2025 · lost in the static · forever searching"}
                    </p>
                </div>
                <div class="footer-waitlist">
                    <h3><span class="accent">{"JOIN"}</span>{" THE WAITLIST"}</h3>
                    <form onsubmit={onsubmit} class="waitlist-form" novalidate=true>
                        <input
                            type="email"
                            placeholder="ENTER YOUR EMAIL"
                            value={(*email).clone()}
                            oninput={oninput}
                        />
                        <button type="submit">{"SUBSCRIBE"}</button>
                    </form>
                    {
                        if let Some(err) = (*error).as_ref() {
                            html! { <div class="waitlist-error">{err.to_string()}</div> }
                        } else if *subscribed {
                            html! { <div class="waitlist-ok">{"SIGNAL RECEIVED. WATCH YOUR INBOX."}</div> }
                        } else {
                            html! {
                                <div class="waitlist-note">
                                    {"By subscribing, you agree to receive updates. Your data is protected."}
                                </div>
                            }
                        }
                    }
                </div>
            </div>
            <div class="footer-social">
                {
                    SOCIAL_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer">{*label}</a>
                    }).collect::<Html>()
                }
            </div>
            <div class="footer-ticker">
                <div class="ticker-content">{TICKER}{TICKER}</div>
            </div>
            <div class="footer-copy">{format!("© {} DQN ANIME", year)}</div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        position: relative;
        width: 100%;
        overflow: hidden;
        background: #111;
        border-top: 1px solid #333;
        color: #aaa;
    }
    .footer-content {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        gap: 1.5rem;
        padding: 20px 25px;
        border-bottom: 1px solid #222;
    }
    .footer-logo {
        width: 100px;
    }
    .footer-tagline {
        color: #777;
        font-size: 14px;
        letter-spacing: 0.05em;
    }
    .footer-waitlist h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #fff;
    }
    .waitlist-form {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .waitlist-form input {
        flex: 1;
        min-width: 220px;
        background: #0d0d12;
        border: 1px solid #333;
        color: #fff;
        padding: 0.75rem 1rem;
        font-size: 14px;
        outline: none;
    }
    .waitlist-form input:focus {
        border-color: #ff2d55;
    }
    .waitlist-form button {
        background: #0d0d12;
        border: 1px solid #ff2d55;
        color: #ff2d55;
        padding: 0.75rem 1.5rem;
        font-size: 14px;
        cursor: pointer;
        transition: background 0.3s, color 0.3s;
    }
    .waitlist-form button:hover {
        background: #ff2d55;
        color: #fff;
    }
    .waitlist-note, .waitlist-error, .waitlist-ok {
        margin-top: 0.75rem;
        font-size: 0.75rem;
    }
    .waitlist-note { color: #6b7280; }
    .waitlist-error { color: #ff2d55; }
    .waitlist-ok { color: #e5e7eb; }
    .footer-social {
        display: flex;
        justify-content: center;
        gap: 2rem;
        padding: 1.5rem 0;
        border-bottom: 1px solid #222;
    }
    .footer-social a {
        color: #666;
        font-size: 12px;
        letter-spacing: 0.05em;
        text-decoration: none;
    }
    .footer-social a:hover {
        color: #ff2d55;
    }
    .footer-ticker {
        position: relative;
        height: 16px;
        overflow: hidden;
        background: #0a0a0a;
        border-top: 1px solid #222;
    }
    .ticker-content {
        position: absolute;
        white-space: nowrap;
        color: #444;
        font-size: 11px;
        animation: ticker 30s linear infinite;
    }
    @keyframes ticker {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    .footer-copy {
        text-align: center;
        font-size: 11px;
        color: #555;
        padding: 0.5rem 0;
    }
"#;
