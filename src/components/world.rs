use yew::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("4+", "MAJOR DISTRICTS"),
    ("12M+", "POPULATION"),
    ("60%", "AUGMENTED"),
    ("7", "MEGACORPS"),
];

#[derive(Properties, PartialEq)]
pub struct WorldSectionProps {
    #[prop_or_default]
    pub section_ref: NodeRef,
}

#[function_component(WorldSection)]
pub fn world_section(props: &WorldSectionProps) -> Html {
    html! {
        <section ref={props.section_ref.clone()} class="world-section">
            <style>{WORLD_CSS}</style>
            <h2 class="section-title"><span class="accent">{"ABOUT "}</span>{"US"}</h2>
            <div class="world-grid">
                <div class="world-image">
                    <img src="/logo white on black.png" alt="Neo-Tokyo cityscape" loading="lazy" />
                    <div class="world-caption">
                        <h3>{"CODE 4861"}</h3>
                        <span class="accent">{"ネオン地区"}</span>
                    </div>
                </div>
                <div class="world-copy">
                    <div class="world-lead">
                        {"A sprawling metropolis of neon lights, corporate towers, and underground networks where technology blurs the line between human and machine."}
                    </div>
                    <p>
                        {"After the Great System Collapse of 2076, Neo-Tokyo emerged as the epicenter of cybernetic innovation and corporate warfare. The city is divided into distinct zones, each controlled by different mega-corporations or criminal syndicates."}
                    </p>
                    <div class="world-stats">
                        {
                            STATS.iter().map(|(value, label)| html! {
                                <div class="world-stat" key={*label}>
                                    <div class="stat-value">{*value}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

const WORLD_CSS: &str = r#"
    .world-section {
        position: relative;
        z-index: 30;
        padding: 5rem 4rem;
        background: #0d0d12;
    }
    .section-title {
        font-size: 3rem;
        font-weight: 700;
        color: #fff;
        margin-bottom: 3rem;
    }
    .world-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
    }
    .world-image {
        position: relative;
        aspect-ratio: 16 / 9;
        overflow: hidden;
        border: 1px solid #333;
    }
    .world-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s;
    }
    .world-image:hover img {
        transform: scale(1.1);
    }
    .world-caption {
        position: absolute;
        left: 1.5rem;
        bottom: 1.5rem;
        color: #fff;
    }
    .world-lead {
        font-size: 1.125rem;
        color: #d1d5db;
        border-left: 2px solid #ff2d55;
        padding-left: 1rem;
    }
    .world-copy p {
        color: #9ca3af;
    }
    .world-stats {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        margin-top: 2rem;
    }
    .world-stat {
        background: #111;
        border: 1px solid #333;
        padding: 1rem;
        transition: border-color 0.2s, transform 0.2s;
    }
    .world-stat:hover {
        border-color: #ff2d55;
        transform: scale(1.05);
    }
    .stat-value {
        color: #ff2d55;
        font-size: 1.25rem;
    }
    .stat-label {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    @media (max-width: 1023px) {
        .world-section {
            padding: 5rem 1rem;
        }
        .world-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
