//! Static category taxonomy.
//!
//! Groups cluster leaf categories for coarse filtering ("Instalações" covers
//! electricians, plumbers, ...). The table mirrors the categories seeded in the
//! database; slugs are the stable keys.

use serde::Serialize;

/// A named cluster of leaf categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub slug: &'static str,
    pub subcategories: &'static [&'static str],
}

impl CategoryGroup {
    pub fn contains(&self, leaf_slug: &str) -> bool {
        self.subcategories.contains(&leaf_slug)
    }
}

/// A leaf category as seeded in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCategory {
    pub name: &'static str,
    pub slug: &'static str,
}

pub const CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "Construção e Reformas",
        slug: "construcao-reformas",
        subcategories: &[
            "pedreiro",
            "pintor",
            "gesseiro",
            "azulejista",
            "vidraceiro",
            "serralheiro",
            "marceneiro",
            "carpinteiro",
            "impermeabilizador",
            "mestre-de-obras",
        ],
    },
    CategoryGroup {
        name: "Instalações",
        slug: "instalacoes",
        subcategories: &[
            "eletricista",
            "encanador",
            "instalador-ar-condicionado",
            "instalador-tv-antenas",
            "instalador-cameras",
            "instalador-redes",
        ],
    },
    CategoryGroup {
        name: "Limpeza e Organização",
        slug: "limpeza-organizacao",
        subcategories: &[
            "diarista",
            "faxineira",
            "lavador-estofados",
            "dedetizador",
            "jardineiro",
            "piscineiro",
        ],
    },
    CategoryGroup {
        name: "Manutenção e Reparos",
        slug: "manutencao-reparos",
        subcategories: &[
            "chaveiro",
            "montador-moveis",
            "tecnico-eletrodomesticos",
            "tecnico-celular",
            "tecnico-informatica",
            "mecanico",
            "eletricista-automotivo",
            "borracheiro",
        ],
    },
    CategoryGroup {
        name: "Beleza e Estética",
        slug: "beleza-estetica",
        subcategories: &[
            "cabeleireira",
            "manicure",
            "maquiadora",
            "barbeiro",
            "designer-sobrancelhas",
            "esteticista",
            "massagista",
        ],
    },
    CategoryGroup {
        name: "Saúde e Bem-Estar",
        slug: "saude-bem-estar",
        subcategories: &[
            "personal-trainer",
            "fisioterapeuta",
            "nutricionista",
            "cuidador-idosos",
            "enfermeiro",
        ],
    },
    CategoryGroup {
        name: "Educação e Aulas",
        slug: "educacao-aulas",
        subcategories: &[
            "professor-particular",
            "professor-musica",
            "professor-idiomas",
            "instrutor-autoescola",
        ],
    },
    CategoryGroup {
        name: "Eventos e Gastronomia",
        slug: "eventos-gastronomia",
        subcategories: &[
            "cozinheira",
            "confeiteira",
            "buffet",
            "bartender",
            "dj",
            "fotografo",
            "decorador-festas",
        ],
    },
    CategoryGroup {
        name: "Transporte e Mudanças",
        slug: "transporte-mudancas",
        subcategories: &["motorista-particular", "freteiro", "mudancas", "motoboy"],
    },
    CategoryGroup {
        name: "Serviços Profissionais",
        slug: "servicos-profissionais",
        subcategories: &[
            "contador",
            "advogado",
            "despachante",
            "designer-grafico",
            "desenvolvedor-sites",
            "social-media",
        ],
    },
    CategoryGroup {
        name: "Pets",
        slug: "pets",
        subcategories: &["pet-sitter", "dog-walker", "banho-tosa", "veterinario"],
    },
];

const fn seed(name: &'static str, slug: &'static str) -> SeedCategory {
    SeedCategory { name, slug }
}

/// Every leaf category available on the platform.
pub const SERVICE_CATEGORIES: &[SeedCategory] = &[
    // Construção e Reformas
    seed("Pedreiro", "pedreiro"),
    seed("Pintor", "pintor"),
    seed("Gesseiro", "gesseiro"),
    seed("Azulejista", "azulejista"),
    seed("Vidraceiro", "vidraceiro"),
    seed("Serralheiro", "serralheiro"),
    seed("Marceneiro", "marceneiro"),
    seed("Carpinteiro", "carpinteiro"),
    seed("Impermeabilizador", "impermeabilizador"),
    seed("Mestre de Obras", "mestre-de-obras"),
    // Instalações
    seed("Eletricista", "eletricista"),
    seed("Encanador", "encanador"),
    seed("Instalador de Ar-Condicionado", "instalador-ar-condicionado"),
    seed("Instalador de TV e Antenas", "instalador-tv-antenas"),
    seed("Instalador de Câmeras", "instalador-cameras"),
    seed("Instalador de Redes e Internet", "instalador-redes"),
    // Limpeza e Organização
    seed("Diarista", "diarista"),
    seed("Faxineira", "faxineira"),
    seed("Lavador de Estofados", "lavador-estofados"),
    seed("Dedetizador", "dedetizador"),
    seed("Jardineiro", "jardineiro"),
    seed("Piscineiro", "piscineiro"),
    // Manutenção e Reparos
    seed("Chaveiro", "chaveiro"),
    seed("Montador de Móveis", "montador-moveis"),
    seed("Técnico em Eletrodomésticos", "tecnico-eletrodomesticos"),
    seed("Técnico em Celular", "tecnico-celular"),
    seed("Técnico em Informática", "tecnico-informatica"),
    seed("Mecânico", "mecanico"),
    seed("Eletricista Automotivo", "eletricista-automotivo"),
    seed("Borracheiro", "borracheiro"),
    // Beleza e Estética
    seed("Cabeleireira", "cabeleireira"),
    seed("Manicure", "manicure"),
    seed("Maquiadora", "maquiadora"),
    seed("Barbeiro", "barbeiro"),
    seed("Designer de Sobrancelhas", "designer-sobrancelhas"),
    seed("Esteticista", "esteticista"),
    seed("Massagista", "massagista"),
    // Saúde e Bem-Estar
    seed("Personal Trainer", "personal-trainer"),
    seed("Fisioterapeuta", "fisioterapeuta"),
    seed("Nutricionista", "nutricionista"),
    seed("Cuidador de Idosos", "cuidador-idosos"),
    seed("Enfermeiro(a)", "enfermeiro"),
    // Educação e Aulas
    seed("Professor Particular", "professor-particular"),
    seed("Professor de Música", "professor-musica"),
    seed("Professor de Idiomas", "professor-idiomas"),
    seed("Instrutor de Autoescola", "instrutor-autoescola"),
    // Eventos e Gastronomia
    seed("Cozinheira", "cozinheira"),
    seed("Confeiteira", "confeiteira"),
    seed("Buffet", "buffet"),
    seed("Bartender", "bartender"),
    seed("DJ", "dj"),
    seed("Fotógrafo", "fotografo"),
    seed("Decorador de Festas", "decorador-festas"),
    // Transporte e Mudanças
    seed("Motorista Particular", "motorista-particular"),
    seed("Freteiro", "freteiro"),
    seed("Mudanças", "mudancas"),
    seed("Motoboy", "motoboy"),
    // Serviços Profissionais
    seed("Contador", "contador"),
    seed("Advogado", "advogado"),
    seed("Despachante", "despachante"),
    seed("Designer Gráfico", "designer-grafico"),
    seed("Desenvolvedor de Sites", "desenvolvedor-sites"),
    seed("Social Media", "social-media"),
    // Pets
    seed("Pet Sitter", "pet-sitter"),
    seed("Dog Walker", "dog-walker"),
    seed("Banho e Tosa", "banho-tosa"),
    seed("Veterinário", "veterinario"),
    // Outros
    seed("Costureira", "costureira"),
    seed("Sapateiro", "sapateiro"),
    seed("Lavanderia", "lavanderia"),
    seed("Soldador", "soldador"),
    seed("Outros", "outros"),
];

/// Find a group by its own slug.
pub fn find_group(group_slug: &str) -> Option<&'static CategoryGroup> {
    CATEGORY_GROUPS.iter().find(|g| g.slug == group_slug)
}

/// The group a leaf category belongs to, if any.
pub fn group_for_leaf(leaf_slug: &str) -> Option<&'static CategoryGroup> {
    CATEGORY_GROUPS.iter().find(|g| g.contains(leaf_slug))
}

/// Member leaf slugs of a group; empty for unknown groups.
pub fn member_slugs(group_slug: &str) -> &'static [&'static str] {
    find_group(group_slug).map_or(&[], |g| g.subcategories)
}

/// A category filter resolved against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Matches providers holding any member of the group.
    Group(&'static CategoryGroup),
    /// Matches providers holding exactly this slug.
    Leaf(String),
}

impl CategoryFilter {
    /// Group slugs win over leaf slugs. Anything else is a leaf lookup, which
    /// simply matches nothing when no provider holds that slug.
    pub fn resolve(slug: &str) -> Self {
        match find_group(slug) {
            Some(group) => CategoryFilter::Group(group),
            None => CategoryFilter::Leaf(slug.to_string()),
        }
    }

    pub fn matches_slug(&self, slug: &str) -> bool {
        match self {
            CategoryFilter::Group(group) => group.contains(slug),
            CategoryFilter::Leaf(leaf) => leaf == slug,
        }
    }

    /// True when any of the given category slugs passes the filter.
    pub fn matches_any<'a>(&self, mut slugs: impl Iterator<Item = &'a str>) -> bool {
        slugs.any(|slug| self.matches_slug(slug))
    }
}
