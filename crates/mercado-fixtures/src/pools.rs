// crates/mercado-fixtures/src/pools.rs
// ============================================================================
// Module: Fixture Word Pools
// Description: Static vocabulary backing randomized fixture values.
// Purpose: Keep generated values schema-valid and recognizably grocery-shaped.
// Dependencies: std
// ============================================================================

/// Leading words for market names.
pub(crate) const COMPANY_PREFIXES: &[&str] =
    &["Mercado", "Emporio", "Armazem", "Mercearia", "Supermercado", "Quitanda"];

/// Family names shared by market names and street addresses.
pub(crate) const SURNAMES: &[&str] = &[
    "Almeida", "Barbosa", "Cardoso", "Duarte", "Ferreira", "Gusmao", "Lacerda", "Moreira",
    "Nogueira", "Oliveira", "Pereira", "Queiroz", "Ribeiro", "Siqueira", "Teixeira",
];

/// Street designators for addresses.
pub(crate) const STREET_TYPES: &[&str] = &["Rua", "Avenida", "Travessa", "Alameda"];

/// District names closing an address.
pub(crate) const DISTRICTS: &[&str] =
    &["Centro", "Jardim Botanico", "Vila Nova", "Boa Vista", "Santa Luzia", "Alto da Serra"];

/// Fruit product names.
pub(crate) const FRUITS: &[&str] = &[
    "Banana", "Manga", "Abacaxi", "Goiaba", "Maracuja", "Caju", "Acerola", "Jabuticaba",
    "Graviola", "Pitanga",
];

/// Vegetable product names.
pub(crate) const VEGETABLES: &[&str] = &[
    "Abobrinha", "Berinjela", "Chuchu", "Quiabo", "Mandioca", "Beterraba", "Couve", "Jilo",
    "Maxixe", "Inhame",
];

/// Sweet product names.
pub(crate) const SWEETS: &[&str] = &[
    "Brigadeiro",
    "Beijinho",
    "Quindim",
    "Cocada",
    "Pacoca",
    "Canjica",
    "Pudim",
    "Goiabada",
    "Pe de Moleque",
    "Bolo de Rolo",
];
