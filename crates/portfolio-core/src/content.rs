//! # Page Content
//!
//! Static data rendered on the page: profile, hero stats, skills,
//! formations and the fallback projects shown when the API is unreachable.

use chrono::Utc;

use crate::types::{format_date, Project};

/// Profile shown in the header, hero and contact sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Display name.
    pub name: &'static str,
    /// Role badge above the headline.
    pub role: &'static str,
    /// Hero headline.
    pub headline: &'static str,
    /// Hero paragraph.
    pub bio: &'static str,
    /// Contact email address.
    pub email: &'static str,
    /// Professional-network profile URL.
    pub linkedin_url: &'static str,
    /// Source-hosting profile URL.
    pub github_url: &'static str,
    /// Account whose repositories fill the projects panel.
    pub github_handle: &'static str,
}

impl Profile {
    /// `mailto:` link for the contact email.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// URL without the scheme and `www.` prefix, for link labels.
    #[must_use]
    pub fn display_url(url: &str) -> &str {
        let url = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        url.strip_prefix("www.").unwrap_or(url).trim_end_matches('/')
    }
}

/// The portfolio owner.
pub const PROFILE: Profile = Profile {
    name: "Jéssica Ferreira Teixeira",
    role: "Engenheira de QA em Formação",
    headline: "Bem-vindo ao meu Portfólio",
    bio: "Sou apaixonada por garantia de qualidade e testes de software. \
          Atualmente em formação como Engenheira de QA, com foco em testes \
          manuais, automação e processos de qualidade.",
    email: "jessyteixeiraqa@gmail.com",
    linkedin_url: "https://www.linkedin.com/in/jessyteixeiraqa/",
    github_url: "https://github.com/JessyTeixeira-QA",
    github_handle: "JessyTeixeira-QA",
};

/// Message shown when the projects panel falls back to static data.
pub const DEGRADED_MESSAGE: &str =
    "Não foi possível carregar os projetos do GitHub. Exibindo projetos estáticos.";

/// A headline number in the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Value, e.g. `9+`.
    pub value: &'static str,
    /// Label under the value.
    pub label: &'static str,
}

/// Hero stats.
pub const STATS: [Stat; 3] = [
    Stat {
        value: "9+",
        label: "Projetos",
    },
    Stat {
        value: "4+",
        label: "Formações",
    },
    Stat {
        value: "2+",
        label: "Anos de Experiência",
    },
];

/// A completed course track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formation {
    /// Track title.
    pub title: &'static str,
    /// Platform offering it.
    pub platform: &'static str,
    /// Course count and workload.
    pub hours: &'static str,
    /// Completion date.
    pub date: &'static str,
}

/// Completed formations.
pub const FORMATIONS: [Formation; 3] = [
    Formation {
        title: "Formação: A partir do zero: iniciante em programação",
        platform: "Alura",
        hours: "5 cursos; 31 horas",
        date: "Outubro 2025",
    },
    Formation {
        title: "Formação: Carreira QA: processos e automação de testes",
        platform: "Alura",
        hours: "6 cursos; 52 horas",
        date: "Outubro 2025",
    },
    Formation {
        title: "Testes Automáticos + Curso Completo de Teste de Software",
        platform: "Udemy",
        hours: "1 curso; 5 horas",
        date: "Outubro 2025",
    },
];

/// Badge colour family for a skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTone {
    /// Testing skills.
    Blue,
    /// Tools.
    Purple,
    /// Technical knowledge.
    Green,
    /// Soft skills.
    Orange,
}

impl SkillTone {
    /// Stylesheet class for badges of this tone.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Blue => "badge tone-blue",
            Self::Purple => "badge tone-purple",
            Self::Green => "badge tone-green",
            Self::Orange => "badge tone-orange",
        }
    }
}

/// A skill category and its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Category title.
    pub category: &'static str,
    /// Items in the category.
    pub items: &'static [&'static str],
    /// Badge colour.
    pub tone: SkillTone,
}

/// Skills, grouped by category.
pub const SKILLS: [Skill; 4] = [
    Skill {
        category: "Testes & QA",
        items: &[
            "Testes Manuais",
            "Testes Automáticos",
            "Cypress",
            "Testes de Software",
            "Casos de Teste",
        ],
        tone: SkillTone::Blue,
    },
    Skill {
        category: "Ferramentas & Tecnologias",
        items: &["Cypress", "Postman", "Git", "GitHub", "Excel", "Power BI"],
        tone: SkillTone::Purple,
    },
    Skill {
        category: "Conhecimentos Técnicos",
        items: &["JavaScript", "HTML", "CSS", "Automação de Testes", "Testes API"],
        tone: SkillTone::Green,
    },
    Skill {
        category: "Soft Skills",
        items: &[
            "Atenção aos Detalhes",
            "Comunicação",
            "Trabalho em Equipe",
            "Resolução de Problemas",
            "Pensamento Crítico",
        ],
        tone: SkillTone::Orange,
    },
];

/// Projects shown when the repository API cannot be reached.
///
/// Their update date is the day the list is built.
#[must_use]
pub fn fallback_projects() -> Vec<Project> {
    let today = format_date(Utc::now());

    vec![
        Project {
            name: "allbooks".to_string(),
            description: "Aplicação de gerenciamento de livros".to_string(),
            url: "https://github.com/JessyTeixeira-QA/allbooks".to_string(),
            language: "JavaScript".to_string(),
            updated_at: today.clone(),
        },
        Project {
            name: "api-alurabooks".to_string(),
            description: "API para gerenciamento de livros".to_string(),
            url: "https://github.com/JessyTeixeira-QA/api-alurabooks".to_string(),
            language: "Node.js".to_string(),
            updated_at: today,
        },
    ]
}
