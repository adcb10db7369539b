//! Migration v3: Tox21 toxicity data

pub(super) const TABLES: &[&str] =
    &["genes", "experimental_cell_lines", "tox_assays", "tox21_molecules", "tox21_data"];

pub(super) const SQLITE: &str = "
CREATE TABLE IF NOT EXISTS genes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    uniprot_id INTEGER UNIQUE
);

CREATE TABLE IF NOT EXISTS experimental_cell_lines (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    experimental_cell_clo_id TEXT NOT NULL UNIQUE,
    cell TEXT,
    cell_clo_id TEXT,
    cellosaurus_id TEXT,
    organism TEXT,
    organism_taxon_id INTEGER
);

CREATE TABLE IF NOT EXISTS tox_assays (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    assay_type TEXT NOT NULL,
    pair_id INTEGER,
    pubchem_aid INTEGER,
    tox21_aid INTEGER,
    reporter_gene_assay TEXT,
    exp_cell_line_id INTEGER NOT NULL REFERENCES experimental_cell_lines(id),
    gene_id INTEGER REFERENCES genes(id),
    target TEXT NOT NULL,
    target_effect TEXT NOT NULL,
    target_mode_of_action TEXT NOT NULL CHECK (target_mode_of_action IN
        ('agonist', 'antagonist', 'permeabilization', 'inhibition', 'activation')),
    kit TEXT,
    physical_detection_method TEXT,
    detection_instrument TEXT,
    definition TEXT
);

CREATE TABLE IF NOT EXISTS tox21_molecules (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pubchem_aid INTEGER,
    tox21_sid TEXT NOT NULL DEFAULT '[]',
    smiles TEXT NOT NULL,
    fingerprint TEXT,
    cluster INTEGER
);

CREATE TABLE IF NOT EXISTS tox21_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    molecule_id INTEGER NOT NULL REFERENCES tox21_molecules(id),
    assay_id INTEGER NOT NULL REFERENCES tox_assays(id),
    activity TEXT NOT NULL CHECK (activity IN ('active', 'inactive', 'inconclusive')),
    pac50_val REAL,
    reference TEXT
);

CREATE INDEX IF NOT EXISTS idx_tox21_data_assay ON tox21_data(assay_id);
";

pub(super) const POSTGRES: &str = "
CREATE TABLE IF NOT EXISTS genes (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    uniprot_id BIGINT UNIQUE
);

CREATE TABLE IF NOT EXISTS experimental_cell_lines (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    experimental_cell_clo_id TEXT NOT NULL UNIQUE,
    cell TEXT,
    cell_clo_id TEXT,
    cellosaurus_id TEXT,
    organism TEXT,
    organism_taxon_id BIGINT
);

CREATE TABLE IF NOT EXISTS tox_assays (
    id BIGSERIAL PRIMARY KEY,
    assay_type TEXT NOT NULL,
    pair_id BIGINT,
    pubchem_aid BIGINT,
    tox21_aid BIGINT,
    reporter_gene_assay TEXT,
    exp_cell_line_id BIGINT NOT NULL REFERENCES experimental_cell_lines(id),
    gene_id BIGINT REFERENCES genes(id),
    target TEXT NOT NULL,
    target_effect TEXT NOT NULL,
    target_mode_of_action TEXT NOT NULL CHECK (target_mode_of_action IN
        ('agonist', 'antagonist', 'permeabilization', 'inhibition', 'activation')),
    kit TEXT,
    physical_detection_method TEXT,
    detection_instrument TEXT,
    definition TEXT
);

CREATE TABLE IF NOT EXISTS tox21_molecules (
    id BIGSERIAL PRIMARY KEY,
    pubchem_aid BIGINT,
    tox21_sid JSONB NOT NULL DEFAULT '[]',
    smiles TEXT NOT NULL,
    fingerprint JSONB,
    cluster BIGINT
);

CREATE TABLE IF NOT EXISTS tox21_data (
    id BIGSERIAL PRIMARY KEY,
    molecule_id BIGINT NOT NULL REFERENCES tox21_molecules(id),
    assay_id BIGINT NOT NULL REFERENCES tox_assays(id),
    activity TEXT NOT NULL CHECK (activity IN ('active', 'inactive', 'inconclusive')),
    pac50_val DOUBLE PRECISION,
    reference TEXT
);

CREATE INDEX IF NOT EXISTS idx_tox21_data_assay ON tox21_data(assay_id);
";
