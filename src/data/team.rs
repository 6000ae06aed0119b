#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub number: &'static str,
    pub role: &'static str,
    pub image_url: &'static str,
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "team-1",
            name: "Morphic",
            number: "MORPHIC",
            role: "Lead Developer",
            image_url: "/morphic logo.svg",
        },
        TeamMember {
            id: "team-2",
            name: "Puppeter",
            number: "4861",
            role: "Creative Director",
            image_url: "/logo white on black.png",
        },
    ]
}
