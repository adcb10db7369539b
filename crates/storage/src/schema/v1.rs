//! Migration v1: structures, chemicals, polymers, monomers, solvents and their names

pub(super) const TABLES: &[&str] = &[
    "smarts",
    "chemicals",
    "chemical_names",
    "chemical_substructures",
    "chemical_suppliers",
    "chemical_costs",
    "polymers",
    "polymer_names",
    "properties",
    "polymer_properties",
    "polymer_applications",
    "monomers",
    "monomer_substructures",
    "solvents",
    "solvent_names",
];

pub(super) const SQLITE: &str = "
CREATE TABLE IF NOT EXISTS smarts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    smarts TEXT NOT NULL,
    description TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS chemicals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    smiles TEXT NOT NULL UNIQUE,
    cas TEXT
);

CREATE TABLE IF NOT EXISTS chemical_names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    chemical_id INTEGER NOT NULL REFERENCES chemicals(id),
    name TEXT NOT NULL,
    search_name TEXT NOT NULL,
    naming_convention TEXT,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS chemical_substructures (
    smarts_id INTEGER NOT NULL REFERENCES smarts(id),
    chemical_id INTEGER NOT NULL REFERENCES chemicals(id),
    PRIMARY KEY (smarts_id, chemical_id)
);

CREATE TABLE IF NOT EXISTS chemical_suppliers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    site TEXT
);

CREATE TABLE IF NOT EXISTS chemical_costs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cost REAL NOT NULL,
    cost_unit TEXT NOT NULL,
    amount REAL NOT NULL,
    amount_unit TEXT NOT NULL,
    usd_cost_per_gram REAL NOT NULL,
    chemical_id INTEGER NOT NULL REFERENCES chemicals(id),
    supplier_id INTEGER NOT NULL REFERENCES chemical_suppliers(id),
    datetime TEXT NOT NULL,
    note TEXT
);

CREATE TABLE IF NOT EXISTS polymers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pid TEXT,
    rid TEXT UNIQUE,
    smiles TEXT UNIQUE,
    canonical_smiles TEXT,
    fingerprint TEXT,
    category TEXT
);

CREATE TABLE IF NOT EXISTS polymer_names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pol_id INTEGER NOT NULL REFERENCES polymers(id),
    name TEXT NOT NULL,
    search_name TEXT NOT NULL,
    naming_convention TEXT,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS properties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    short_name TEXT,
    unit TEXT,
    plot_symbol TEXT
);

CREATE TABLE IF NOT EXISTS polymer_properties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pol_id INTEGER NOT NULL REFERENCES polymers(id),
    property_id INTEGER NOT NULL REFERENCES properties(id),
    value REAL NOT NULL,
    method TEXT,
    reference TEXT,
    note TEXT,
    error_value REAL,
    error_type TEXT CHECK (error_type IN ('sd', 'sem', 'variance')),
    conditions TEXT
);

CREATE TABLE IF NOT EXISTS polymer_applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pol_id INTEGER NOT NULL REFERENCES polymers(id),
    application TEXT NOT NULL,
    category TEXT NOT NULL,
    note TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS monomers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    smiles TEXT NOT NULL UNIQUE,
    reference_id TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS monomer_substructures (
    smarts_id INTEGER NOT NULL REFERENCES smarts(id),
    monomer_id INTEGER NOT NULL REFERENCES monomers(id),
    PRIMARY KEY (smarts_id, monomer_id)
);

CREATE TABLE IF NOT EXISTS solvents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    smiles TEXT NOT NULL UNIQUE,
    fingerprint TEXT,
    map4_fingerprint TEXT
);

CREATE TABLE IF NOT EXISTS solvent_names (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sol_id INTEGER NOT NULL REFERENCES solvents(id),
    name TEXT NOT NULL,
    search_name TEXT NOT NULL,
    naming_convention TEXT,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_chemical_names_search ON chemical_names(search_name);
CREATE INDEX IF NOT EXISTS idx_chemical_names_owner ON chemical_names(chemical_id);
CREATE INDEX IF NOT EXISTS idx_polymer_names_search ON polymer_names(search_name);
CREATE INDEX IF NOT EXISTS idx_polymer_names_owner ON polymer_names(pol_id);
CREATE INDEX IF NOT EXISTS idx_solvent_names_search ON solvent_names(search_name);
CREATE INDEX IF NOT EXISTS idx_solvent_names_owner ON solvent_names(sol_id);
CREATE INDEX IF NOT EXISTS idx_chemical_costs_chemical ON chemical_costs(chemical_id);
CREATE INDEX IF NOT EXISTS idx_polymer_properties_polymer ON polymer_properties(pol_id);
";

pub(super) const POSTGRES: &str = "
CREATE TABLE IF NOT EXISTS smarts (
    id BIGSERIAL PRIMARY KEY,
    name TEXT,
    smarts TEXT NOT NULL,
    description TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS chemicals (
    id BIGSERIAL PRIMARY KEY,
    smiles TEXT NOT NULL UNIQUE,
    cas TEXT
);

CREATE TABLE IF NOT EXISTS chemical_names (
    id BIGSERIAL PRIMARY KEY,
    chemical_id BIGINT NOT NULL REFERENCES chemicals(id),
    name TEXT NOT NULL,
    search_name TEXT NOT NULL,
    naming_convention TEXT,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS chemical_substructures (
    smarts_id BIGINT NOT NULL REFERENCES smarts(id),
    chemical_id BIGINT NOT NULL REFERENCES chemicals(id),
    PRIMARY KEY (smarts_id, chemical_id)
);

CREATE TABLE IF NOT EXISTS chemical_suppliers (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    site TEXT
);

CREATE TABLE IF NOT EXISTS chemical_costs (
    id BIGSERIAL PRIMARY KEY,
    cost DOUBLE PRECISION NOT NULL,
    cost_unit TEXT NOT NULL,
    amount DOUBLE PRECISION NOT NULL,
    amount_unit TEXT NOT NULL,
    usd_cost_per_gram DOUBLE PRECISION NOT NULL,
    chemical_id BIGINT NOT NULL REFERENCES chemicals(id),
    supplier_id BIGINT NOT NULL REFERENCES chemical_suppliers(id),
    datetime TIMESTAMPTZ NOT NULL,
    note TEXT
);

CREATE TABLE IF NOT EXISTS polymers (
    id BIGSERIAL PRIMARY KEY,
    pid TEXT,
    rid TEXT UNIQUE,
    smiles TEXT UNIQUE,
    canonical_smiles TEXT,
    fingerprint JSONB,
    category TEXT
);

CREATE TABLE IF NOT EXISTS polymer_names (
    id BIGSERIAL PRIMARY KEY,
    pol_id BIGINT NOT NULL REFERENCES polymers(id),
    name TEXT NOT NULL,
    search_name TEXT NOT NULL,
    naming_convention TEXT,
    notes TEXT
);

CREATE TABLE IF NOT EXISTS properties (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    short_name TEXT,
    unit TEXT,
    plot_symbol TEXT
);

CREATE TABLE IF NOT EXISTS polymer_properties (
    id BIGSERIAL PRIMARY KEY,
    pol_id BIGINT NOT NULL REFERENCES polymers(id),
    property_id BIGINT NOT NULL REFERENCES properties(id),
    value DOUBLE PRECISION NOT NULL,
    method TEXT,
    reference TEXT,
    note TEXT,
    error_value DOUBLE PRECISION,
    error_type TEXT CHECK (error_type IN ('sd', 'sem', 'variance')),
    conditions JSONB
);

CREATE TABLE IF NOT EXISTS polymer_applications (
    id BIGSERIAL PRIMARY KEY,
    pol_id BIGINT NOT NULL REFERENCES polymers(id),
    application TEXT NOT NULL,
    category TEXT NOT NULL,
    note TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS monomers (
    id BIGSERIAL PRIMARY KEY,
    smiles TEXT NOT NULL UNIQUE,
    reference_id TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS monomer_substructures (
    smarts_id BIGINT NOT NULL REFERENCES smarts(id),
    monomer_id BIGINT NOT NULL REFERENCES monomers(id),
    PRIMARY KEY (smarts_id, monomer_id)
);

CREATE TABLE IF NOT EXISTS solvents (
    id BIGSERIAL PRIMARY KEY,
    smiles TEXT NOT NULL UNIQUE,
    fingerprint JSONB,
    map4_fingerprint JSONB
);

CREATE TABLE IF NOT EXISTS solvent_names (
    id BIGSERIAL PRIMARY KEY,
    sol_id BIGINT NOT NULL REFERENCES solvents(id),
    name TEXT NOT NULL,
    search_name TEXT NOT NULL,
    naming_convention TEXT,
    notes TEXT
);

CREATE INDEX IF NOT EXISTS idx_chemical_names_search ON chemical_names(search_name);
CREATE INDEX IF NOT EXISTS idx_chemical_names_owner ON chemical_names(chemical_id);
CREATE INDEX IF NOT EXISTS idx_polymer_names_search ON polymer_names(search_name);
CREATE INDEX IF NOT EXISTS idx_polymer_names_owner ON polymer_names(pol_id);
CREATE INDEX IF NOT EXISTS idx_solvent_names_search ON solvent_names(search_name);
CREATE INDEX IF NOT EXISTS idx_solvent_names_owner ON solvent_names(sol_id);
CREATE INDEX IF NOT EXISTS idx_chemical_costs_chemical ON chemical_costs(chemical_id);
CREATE INDEX IF NOT EXISTS idx_polymer_properties_polymer ON polymer_properties(pol_id);
";
