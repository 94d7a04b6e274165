use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of pictograms used by the portfolio.
///
/// Content refers to icons by name (`"FaCode"`, `"SiMongodb"`, ...). Names are
/// resolved once when content is built; anything unrecognized becomes
/// [`Icon::Unknown`], which renders as a visible placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Icon {
    Code,
    Palette,
    Server,
    Mobile,
    Database,
    Chart,
    Laptop,
    LaptopCode,
    GraduationCap,
    Briefcase,
    Certificate,
    Award,
    Trophy,
    React,
    Node,
    Python,
    Docker,
    Aws,
    Git,
    TypeScript,
    Tailwind,
    Django,
    MongoDb,
    PostgreSql,
    NextJs,
    JavaScript,
    Express,
    ExternalLink,
    Envelope,
    MapMarker,
    Quote,
    LinkedIn,
    GitHub,
    Twitter,
    #[default]
    Unknown,
}

const NAMES: &[(&str, Icon)] = &[
    ("FaCode", Icon::Code),
    ("FaPalette", Icon::Palette),
    ("FaServer", Icon::Server),
    ("FaMobileAlt", Icon::Mobile),
    ("FaDatabase", Icon::Database),
    ("FaChartLine", Icon::Chart),
    ("FaLaptop", Icon::Laptop),
    ("FaLaptopCode", Icon::LaptopCode),
    ("FaGraduationCap", Icon::GraduationCap),
    ("FaBriefcase", Icon::Briefcase),
    ("FaCertificate", Icon::Certificate),
    ("FaAward", Icon::Award),
    ("FaTrophy", Icon::Trophy),
    ("FaReact", Icon::React),
    ("FaNodeJs", Icon::Node),
    ("FaPython", Icon::Python),
    ("FaDocker", Icon::Docker),
    ("FaAws", Icon::Aws),
    ("SiGit", Icon::Git),
    ("SiTypescript", Icon::TypeScript),
    ("SiTailwindcss", Icon::Tailwind),
    ("SiDjango", Icon::Django),
    ("SiMongodb", Icon::MongoDb),
    ("SiPostgresql", Icon::PostgreSql),
    ("SiNextdotjs", Icon::NextJs),
    ("SiJavascript", Icon::JavaScript),
    ("FaExternalLinkAlt", Icon::ExternalLink),
    ("FaEnvelope", Icon::Envelope),
    ("FaMapMarkerAlt", Icon::MapMarker),
    ("FaQuoteLeft", Icon::Quote),
    ("FaLinkedin", Icon::LinkedIn),
    ("FaGithub", Icon::GitHub),
    ("FaTwitter", Icon::Twitter),
];

impl Icon {
    pub fn from_name(name: &str) -> Self {
        NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Unknown)
    }

    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(_, icon)| *icon == self)
            .map(|(n, _)| *n)
    }

    /// Icon shown next to a technology badge; generic code icon otherwise.
    pub fn for_technology(tech: &str) -> Self {
        match tech {
            "React" | "React.js" => Icon::React,
            "TypeScript" => Icon::TypeScript,
            "Tailwind CSS" | "Tailwind" => Icon::Tailwind,
            "Node.js" => Icon::Node,
            "Python" => Icon::Python,
            "Django" => Icon::Django,
            "MongoDB" => Icon::MongoDb,
            "PostgreSQL" => Icon::PostgreSql,
            "Docker" => Icon::Docker,
            "Next.js" => Icon::NextJs,
            "JavaScript" => Icon::JavaScript,
            "Express" => Icon::Express,
            "AWS" => Icon::Aws,
            "Git" => Icon::Git,
            _ => Icon::Code,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Palette => "🎨",
            Icon::Server => "▤",
            Icon::Mobile => "▯",
            Icon::Database => "⛁",
            Icon::Chart => "📈",
            Icon::Laptop => "💻",
            Icon::LaptopCode => "⌨",
            Icon::GraduationCap => "🎓",
            Icon::Briefcase => "💼",
            Icon::Certificate => "📜",
            Icon::Award => "🏅",
            Icon::Trophy => "🏆",
            Icon::React => "⚛",
            Icon::Node => "⬢",
            Icon::Python => "🐍",
            Icon::Docker => "🐳",
            Icon::Aws => "☁",
            Icon::Git => "⎇",
            Icon::TypeScript => "TS",
            Icon::Tailwind => "≈",
            Icon::Django => "dj",
            Icon::MongoDb => "🍃",
            Icon::PostgreSql => "🐘",
            Icon::NextJs => "▲",
            Icon::JavaScript => "JS",
            Icon::Express => "ex",
            Icon::ExternalLink => "↗",
            Icon::Envelope => "✉",
            Icon::MapMarker => "⌖",
            Icon::Quote => "❝",
            Icon::LinkedIn => "in",
            Icon::GitHub => "gh",
            Icon::Twitter => "tw",
            Icon::Unknown => "?",
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name().unwrap_or("Unknown"))
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        let icon = Icon::from_name(&name);
        if icon == Icon::Unknown {
            log::warn!("Unknown icon name in content: {name}");
        }
        Ok(icon)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Icon::from_name("FaCode"), Icon::Code);
        assert_eq!(Icon::from_name("SiPostgresql"), Icon::PostgreSql);
        assert_eq!(Icon::from_name("FaUnicorn"), Icon::Unknown);
    }

    #[test]
    fn test_names_round_trip() {
        for (name, icon) in NAMES {
            assert_eq!(icon.name(), Some(*name));
        }
        assert_eq!(Icon::Unknown.name(), None);
    }

    #[test]
    fn test_for_technology_falls_back_to_code() {
        assert_eq!(Icon::for_technology("React"), Icon::React);
        assert_eq!(Icon::for_technology("Scikit-learn"), Icon::Code);
    }

    #[test]
    fn test_unknown_renders_placeholder() {
        assert_eq!(Icon::Unknown.glyph(), "?");
    }

    #[test]
    fn test_deserialize_unknown_does_not_fail() -> color_eyre::Result<()> {
        let icons: Vec<Icon> = serde_json::from_str(r#"["FaPalette", "NoSuchIcon"]"#)?;
        assert_eq!(icons, vec![Icon::Palette, Icon::Unknown]);
        Ok(())
    }
}
