//! Migration v2: reactions, reaction procedures and polymerizations

pub(super) const TABLES: &[&str] = &[
    "reactions",
    "reaction_procedures",
    "reaction_steps",
    "reaction_procedure_starting_substructure",
    "reaction_polymer_mappings",
    "polymerization_reactions",
    "polymerizations",
];

pub(super) const SQLITE: &str = "
CREATE TABLE IF NOT EXISTS reactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    smarts TEXT NOT NULL,
    description TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS reaction_procedures (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT
);

CREATE TABLE IF NOT EXISTS reaction_steps (
    reaction_id INTEGER NOT NULL REFERENCES reactions(id),
    reaction_procedure_id INTEGER NOT NULL REFERENCES reaction_procedures(id),
    step INTEGER NOT NULL CHECK (step >= 1),
    PRIMARY KEY (reaction_id, reaction_procedure_id, step)
);

CREATE TABLE IF NOT EXISTS reaction_procedure_starting_substructure (
    reaction_procedure_id INTEGER NOT NULL REFERENCES reaction_procedures(id),
    smarts_id INTEGER NOT NULL REFERENCES smarts(id),
    PRIMARY KEY (reaction_procedure_id, smarts_id)
);

CREATE TABLE IF NOT EXISTS reaction_polymer_mappings (
    reaction_procedure_id INTEGER NOT NULL REFERENCES reaction_procedures(id),
    chemical_id INTEGER NOT NULL REFERENCES chemicals(id),
    pol_id INTEGER NOT NULL REFERENCES polymers(id),
    PRIMARY KEY (reaction_procedure_id, chemical_id, pol_id)
);

CREATE TABLE IF NOT EXISTS polymerization_reactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    smarts TEXT NOT NULL,
    description TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS polymerizations (
    polymerization_reaction_id INTEGER NOT NULL REFERENCES polymerization_reactions(id),
    monomer_id INTEGER NOT NULL REFERENCES monomers(id),
    pol_id INTEGER NOT NULL REFERENCES polymers(id),
    PRIMARY KEY (polymerization_reaction_id, monomer_id, pol_id),
    CONSTRAINT unique_monomer_polymerization UNIQUE (polymerization_reaction_id, monomer_id)
);

CREATE INDEX IF NOT EXISTS idx_reaction_steps_procedure ON reaction_steps(reaction_procedure_id, step);
CREATE INDEX IF NOT EXISTS idx_polymerizations_polymer ON polymerizations(pol_id);
";

pub(super) const POSTGRES: &str = "
CREATE TABLE IF NOT EXISTS reactions (
    id BIGSERIAL PRIMARY KEY,
    smarts TEXT NOT NULL,
    description TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS reaction_procedures (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT
);

CREATE TABLE IF NOT EXISTS reaction_steps (
    reaction_id BIGINT NOT NULL REFERENCES reactions(id),
    reaction_procedure_id BIGINT NOT NULL REFERENCES reaction_procedures(id),
    step INTEGER NOT NULL CHECK (step >= 1),
    PRIMARY KEY (reaction_id, reaction_procedure_id, step)
);

CREATE TABLE IF NOT EXISTS reaction_procedure_starting_substructure (
    reaction_procedure_id BIGINT NOT NULL REFERENCES reaction_procedures(id),
    smarts_id BIGINT NOT NULL REFERENCES smarts(id),
    PRIMARY KEY (reaction_procedure_id, smarts_id)
);

CREATE TABLE IF NOT EXISTS reaction_polymer_mappings (
    reaction_procedure_id BIGINT NOT NULL REFERENCES reaction_procedures(id),
    chemical_id BIGINT NOT NULL REFERENCES chemicals(id),
    pol_id BIGINT NOT NULL REFERENCES polymers(id),
    PRIMARY KEY (reaction_procedure_id, chemical_id, pol_id)
);

CREATE TABLE IF NOT EXISTS polymerization_reactions (
    id BIGSERIAL PRIMARY KEY,
    name TEXT,
    smarts TEXT NOT NULL,
    description TEXT,
    reference TEXT
);

CREATE TABLE IF NOT EXISTS polymerizations (
    polymerization_reaction_id BIGINT NOT NULL REFERENCES polymerization_reactions(id),
    monomer_id BIGINT NOT NULL REFERENCES monomers(id),
    pol_id BIGINT NOT NULL REFERENCES polymers(id),
    PRIMARY KEY (polymerization_reaction_id, monomer_id, pol_id),
    CONSTRAINT unique_monomer_polymerization UNIQUE (polymerization_reaction_id, monomer_id)
);

CREATE INDEX IF NOT EXISTS idx_reaction_steps_procedure ON reaction_steps(reaction_procedure_id, step);
CREATE INDEX IF NOT EXISTS idx_polymerizations_polymer ON polymerizations(pol_id);
";
