use std::rc::Rc;

use yew::prelude::*;

use crate::data::team::TeamMember;

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    pub members: Rc<[TeamMember]>,
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    html! {
        <section class="team-section">
            <style>{TEAM_CSS}</style>
            <h2 class="section-title"><span class="accent">{"THE "}</span>{"TEAM"}</h2>
            <div class="team-grid">
                {
                    props.members.iter().map(|member| html! {
                        <div class="team-card" key={member.id}>
                            <div class="team-image">
                                <img src={member.image_url} alt={member.name} loading="lazy" />
                            </div>
                            <div class="team-number">{format!("#{}", member.number)}</div>
                            <h3 class="team-name">{member.name}</h3>
                            <div class="team-role">{member.role}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

const TEAM_CSS: &str = r#"
    .team-section {
        padding: 5rem 4rem;
        background: #000;
    }
    .team-grid {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 2rem;
    }
    .team-card {
        width: 260px;
        background: #0d0d12;
        border: 1px solid #333;
        padding: 1.5rem;
        text-align: center;
        transition: border-color 0.3s;
    }
    .team-card:hover {
        border-color: #ff2d55;
    }
    .team-image {
        height: 200px;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: #000;
        margin-bottom: 1rem;
    }
    .team-image img {
        max-width: 100%;
        max-height: 100%;
    }
    .team-number {
        color: #ff2d55;
        font-size: 0.75rem;
        letter-spacing: 0.1em;
    }
    .team-name {
        color: #fff;
        font-size: 1.5rem;
        margin: 0.25rem 0;
    }
    .team-role {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    @media (max-width: 767px) {
        .team-section {
            padding: 4rem 1rem;
        }
    }
"#;
