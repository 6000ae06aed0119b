#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: u32,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub image_url: &'static str,
}

pub fn characters() -> Vec<Character> {
    vec![
        Character {
            id: 1,
            name: "KIRA-572",
            subtitle: "アンドロイド・ア",
            title: "Android Assassin",
            level: "Combat Level: 97",
            image_url: "/assets/Blood 1.webp",
        },
        Character {
            id: 2,
            name: "ECHO",
            subtitle: "ニューロ・ハッカー",
            title: "Neuro Hacker",
            level: "Tech Level: 92",
            image_url: "/assets/Blood 2.webp",
        },
        Character {
            id: 3,
            name: "RONIN",
            subtitle: "ストリート・サムライ",
            title: "Street Samurai",
            level: "Strength Level: 95",
            image_url: "/assets/Blood 3.webp",
        },
        Character {
            id: 4,
            name: "NEXUS",
            subtitle: "サイバー・メディク",
            title: "Cyber Medic",
            level: "Medical Level: 98",
            image_url: "/assets/Blood 4.webp",
        },
        Character {
            id: 5,
            name: "PHANTOM",
            subtitle: "ゴースト・インフィルトレーター",
            title: "Ghost Infiltrator",
            level: "Stealth Level: 99",
            image_url: "/assets/Blood 5.webp",
        },
        Character {
            id: 6,
            name: "VOLT",
            subtitle: "サンダー・コンダクター",
            title: "Thunder Conductor",
            level: "Power Level: 94",
            image_url: "/assets/Blood 6.webp",
        },
        Character {
            id: 7,
            name: "NOVA",
            subtitle: "サイコ・ブラスター",
            title: "Psycho Blaster",
            level: "Psionic Level: 96",
            image_url: "/assets/Blood 3.webp",
        },
    ]
}
