//! Migration v4: CSST files, solubility data, lab material names, packaging waste

pub(super) const TABLES: &[&str] =
    &["csst_files", "solubility_data", "brettmann_lab", "containers_and_packaging_waste"];

pub(super) const SQLITE: &str = "
CREATE TABLE IF NOT EXISTS csst_files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name TEXT NOT NULL UNIQUE,
    original_name TEXT NOT NULL,
    polymers TEXT NOT NULL DEFAULT '[]',
    solvents TEXT NOT NULL DEFAULT '[]',
    concentrations TEXT NOT NULL DEFAULT '[]',
    date_added TEXT NOT NULL,
    stir_rate REAL NOT NULL,
    start_of_experiment TEXT NOT NULL,
    version TEXT NOT NULL,
    project TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS solubility_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    reference TEXT NOT NULL,
    date_added TEXT NOT NULL,
    pol_id INTEGER NOT NULL REFERENCES polymers(id),
    sol_id INTEGER NOT NULL REFERENCES solvents(id),
    solubility TEXT NOT NULL,
    date_of_test TEXT,
    temp_min REAL,
    temp_max REAL,
    pdi_min REAL,
    pdi_max REAL,
    pol_mw_min REAL,
    pol_mw_max REAL,
    pol_mw_type TEXT,
    conc_mg_per_ml REAL,
    csst_file_id INTEGER REFERENCES csst_files(id)
);

CREATE TABLE IF NOT EXISTS brettmann_lab (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pol_id INTEGER UNIQUE REFERENCES polymers(id),
    sol_id INTEGER UNIQUE REFERENCES solvents(id),
    name TEXT NOT NULL UNIQUE,
    CHECK ((pol_id IS NULL) <> (sol_id IS NULL))
);

CREATE TABLE IF NOT EXISTS containers_and_packaging_waste (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    value INTEGER,
    year INTEGER,
    type TEXT,
    management_pathway TEXT,
    reference TEXT,
    unit TEXT
);

CREATE INDEX IF NOT EXISTS idx_solubility_polymer ON solubility_data(pol_id);
";

pub(super) const POSTGRES: &str = "
CREATE TABLE IF NOT EXISTS csst_files (
    id BIGSERIAL PRIMARY KEY,
    file_name TEXT NOT NULL UNIQUE,
    original_name TEXT NOT NULL,
    polymers JSONB NOT NULL DEFAULT '[]',
    solvents JSONB NOT NULL DEFAULT '[]',
    concentrations JSONB NOT NULL DEFAULT '[]',
    date_added TIMESTAMPTZ NOT NULL,
    stir_rate DOUBLE PRECISION NOT NULL,
    start_of_experiment TIMESTAMPTZ NOT NULL,
    version TEXT NOT NULL,
    project TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS solubility_data (
    id BIGSERIAL PRIMARY KEY,
    reference TEXT NOT NULL,
    date_added TIMESTAMPTZ NOT NULL,
    pol_id BIGINT NOT NULL REFERENCES polymers(id),
    sol_id BIGINT NOT NULL REFERENCES solvents(id),
    solubility TEXT NOT NULL,
    date_of_test TIMESTAMPTZ,
    temp_min DOUBLE PRECISION,
    temp_max DOUBLE PRECISION,
    pdi_min DOUBLE PRECISION,
    pdi_max DOUBLE PRECISION,
    pol_mw_min DOUBLE PRECISION,
    pol_mw_max DOUBLE PRECISION,
    pol_mw_type TEXT,
    conc_mg_per_ml DOUBLE PRECISION,
    csst_file_id BIGINT REFERENCES csst_files(id)
);

CREATE TABLE IF NOT EXISTS brettmann_lab (
    id BIGSERIAL PRIMARY KEY,
    pol_id BIGINT UNIQUE REFERENCES polymers(id),
    sol_id BIGINT UNIQUE REFERENCES solvents(id),
    name TEXT NOT NULL UNIQUE,
    CHECK ((pol_id IS NULL) <> (sol_id IS NULL))
);

CREATE TABLE IF NOT EXISTS containers_and_packaging_waste (
    id BIGSERIAL PRIMARY KEY,
    value BIGINT,
    year SMALLINT,
    type TEXT,
    management_pathway TEXT,
    reference TEXT,
    unit TEXT
);

CREATE INDEX IF NOT EXISTS idx_solubility_polymer ON solubility_data(pol_id);
";
