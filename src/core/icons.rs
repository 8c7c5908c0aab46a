// src/core/icons.rs
//! Ordered icon rule tables. Rules are checked top to bottom and the first
//! match wins, so more specific needles sit above the general ones.

/// Which text of an item a rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Kind,
}

/// Texts an icon is chosen from. `kind` is a project type or a category.
#[derive(Debug, Clone, Copy)]
pub struct IconSubject<'a> {
    pub name: &'a str,
    pub kind: &'a str,
}

impl<'a> IconSubject<'a> {
    pub fn named(name: &'a str) -> Self {
        Self { name, kind: "" }
    }

    fn field(&self, field: Field) -> &'a str {
        match field {
            Field::Name => self.name,
            Field::Kind => self.kind,
        }
    }
}

#[derive(Debug)]
pub struct IconRule {
    pub field: Field,
    pub needles: &'static [&'static str],
    pub icon: &'static str,
}

impl IconRule {
    fn matches(&self, subject: &IconSubject<'_>) -> bool {
        let text = subject.field(self.field);
        self.needles.iter().any(|needle| text.contains(needle))
    }
}

#[derive(Debug)]
pub struct RuleTable {
    pub rules: &'static [IconRule],
    pub default_icon: &'static str,
}

impl RuleTable {
    pub fn select(&self, subject: &IconSubject<'_>) -> &'static str {
        self.rules
            .iter()
            .find(|rule| rule.matches(subject))
            .map_or(self.default_icon, |rule| rule.icon)
    }

    /// Select on a single text, matched against name rules
    pub fn select_text(&self, text: &str) -> &'static str {
        self.select(&IconSubject::named(text))
    }
}

const fn name(needles: &'static [&'static str], icon: &'static str) -> IconRule {
    IconRule {
        field: Field::Name,
        needles,
        icon,
    }
}

const fn kind(needles: &'static [&'static str], icon: &'static str) -> IconRule {
    IconRule {
        field: Field::Kind,
        needles,
        icon,
    }
}

pub static PROJECT_ICONS: RuleTable = RuleTable {
    rules: &[
        name(&["Security", "Crypt"], "🔒"),
        name(&["AI", "Artificial"], "🤖"),
        kind(&["Mobile"], "📱"),
        kind(&["Desktop"], "💻"),
        kind(&["Web"], "🌐"),
    ],
    default_icon: "🚀",
};

pub static CERTIFICATION_ICONS: RuleTable = RuleTable {
    rules: &[
        kind(&["Professional"], "👔"),
        kind(&["Cybersecurity"], "🔒"),
        kind(&["Networking"], "🔌"),
        kind(&["AI", "Artificial"], "🤖"),
        kind(&["Data"], "📊"),
        kind(&["Programming"], "💻"),
    ],
    default_icon: "📜",
};

pub static PROGRAMMING_LANGUAGE_ICONS: RuleTable = RuleTable {
    rules: &[
        name(&["CSS"], "🎨"),
        name(&["HTML"], "🌐"),
        name(&["JavaScript"], "📜"),
        name(&["Python"], "🐍"),
    ],
    default_icon: "💻",
};

pub static FRAMEWORK_ICONS: RuleTable = RuleTable {
    rules: &[
        name(&["Pandas"], "🐼"),
        name(&["Matplotlib"], "📊"),
        name(&["Cryptography"], "🔐"),
        name(&["NumPy"], "🧮"),
        name(&["PyQt5"], "🖥️"),
    ],
    default_icon: "⚡",
};

pub static DOMAIN_ICONS: RuleTable = RuleTable {
    rules: &[
        name(&["Linux"], "🐧"),
        name(&["Cybersecurity"], "🛡️"),
        name(&["AI"], "🤖"),
        name(&["Data"], "📈"),
        name(&["Web"], "🌐"),
        name(&["Desktop"], "💻"),
    ],
    default_icon: "🎯",
};

pub static TOOL_ICONS: RuleTable = RuleTable {
    rules: &[
        name(&["HP"], "💻"),
        name(&["IBM"], "💡"),
        name(&["Cisco"], "🔌"),
        name(&["GitHub"], "🐙"),
        name(&["Git"], "📦"),
        name(&["Linux"], "🐧"),
    ],
    default_icon: "🛠️",
};

pub static SOFT_SKILL_ICONS: RuleTable = RuleTable {
    rules: &[
        name(&["Detail"], "✨"),
        name(&["Documentation"], "📝"),
        name(&["Learning"], "📚"),
        name(&["Analytical"], "🔍"),
        name(&["Problem"], "🧩"),
    ],
    default_icon: "🌟",
};

const INTEREST_ICONS: &[(&str, &str)] = &[
    ("Artificial Intelligence", "🤖"),
    ("Data Science & Analysis", "📊"),
    ("Software Engineering", "💻"),
    ("Cybersecurity Fundamentals", "🔒"),
    ("System Monitoring & Automation", "⚙️"),
    ("Applied Engineering Solutions", "🔧"),
    ("Machine Learning", "🧠"),
    ("Web Development", "🌐"),
    ("Mobile Development", "📱"),
    ("Cloud Computing", "☁️"),
    ("DevOps", "🔄"),
    ("Blockchain", "⛓️"),
    ("Game Development", "🎮"),
    ("UI/UX Design", "🎨"),
    ("Database Management", "🗄️"),
    ("Networking", "📡"),
    ("Embedded Systems", "🔌"),
    ("Robotics", "🤖"),
    ("IoT", "📶"),
    ("Quantum Computing", "⚛️"),
];

const DEFAULT_INTEREST_ICON: &str = "🌟";

/// Interests match on the exact name
pub fn interest_icon(interest: &str) -> &'static str {
    INTEREST_ICONS
        .iter()
        .find(|(name, _)| *name == interest)
        .map_or(DEFAULT_INTEREST_ICON, |(_, icon)| icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_tool_rule_beats_general_one() {
        assert_eq!(TOOL_ICONS.select_text("GitHub Actions"), "🐙");
        assert_eq!(TOOL_ICONS.select_text("Git"), "📦");
        assert_eq!(TOOL_ICONS.select_text("Docker"), "🛠️");
    }

    #[test]
    fn project_name_rules_outrank_type_rules() {
        let subject = IconSubject {
            name: "AI Security Tool",
            kind: "Web Application",
        };
        assert_eq!(PROJECT_ICONS.select(&subject), "🔒");

        let subject = IconSubject {
            name: "Portfolio",
            kind: "Web Application",
        };
        assert_eq!(PROJECT_ICONS.select(&subject), "🌐");

        let subject = IconSubject {
            name: "Notes",
            kind: "",
        };
        assert_eq!(PROJECT_ICONS.select(&subject), "🚀");
    }

    #[test]
    fn certification_categories() {
        let pick = |category| {
            CERTIFICATION_ICONS.select(&IconSubject {
                name: "",
                kind: category,
            })
        };
        assert_eq!(pick("Professional Development"), "👔");
        assert_eq!(pick("Data Analysis"), "📊");
        assert_eq!(pick("Artificial Intelligence"), "🤖");
        assert_eq!(pick("Misc"), "📜");
    }

    #[test]
    fn domain_rules_in_order() {
        assert_eq!(DOMAIN_ICONS.select_text("Linux Desktop"), "🐧");
        assert_eq!(DOMAIN_ICONS.select_text("Web Development"), "🌐");
    }

    #[test]
    fn interests_use_exact_names() {
        assert_eq!(interest_icon("Machine Learning"), "🧠");
        assert_eq!(interest_icon("machine learning"), "🌟");
    }
}
