use cheatsheet_core::{Cheatsheet, CheatsheetSection};

use super::cmd;

pub(super) fn node_npm() -> Cheatsheet {
    Cheatsheet::new("Node.js/npm")
        .with_description("Environnement d'exécution JavaScript et gestionnaire de paquets")
        .with_icon("package")
        .with_tags(&["javascript", "package-manager", "nodejs"])
        .with_section(
            CheatsheetSection::new("Projet")
                .with_item(
                    cmd("Initialiser", "Crée un package.json", "npm init")
                        .with_example("npm init -y"),
                )
                .with_item(cmd("Lancer un script", "Exécute un script du package.json", "npm run <script>"))
                .with_item(cmd("Exécuter un binaire", "Lance un paquet sans l'installer", "npx <paquet>")),
        )
        .with_section(
            CheatsheetSection::new("Dépendances")
                .with_item(
                    cmd("Installer", "Installe les dépendances", "npm install")
                        .with_example("npm install express")
                        .with_example("npm install -D typescript"),
                )
                .with_item(cmd("Installation propre", "Installe depuis le lockfile", "npm ci"))
                .with_item(cmd("Désinstaller", "Retire une dépendance", "npm uninstall <paquet>"))
                .with_item(cmd("Obsolètes", "Liste les paquets à mettre à jour", "npm outdated"))
                .with_item(cmd("Audit", "Recherche les vulnérabilités connues", "npm audit")),
        )
}

pub(super) fn cargo() -> Cheatsheet {
    Cheatsheet::new("Cargo")
        .with_description("Gestionnaire de paquets et outil de build de Rust")
        .with_icon("package")
        .with_tags(&["rust", "package-manager", "build"])
        .with_section(
            CheatsheetSection::new("Projet")
                .with_item(
                    cmd("Nouveau projet", "Crée un binaire ou une bibliothèque", "cargo new <nom>")
                        .with_example("cargo new --lib ma_lib"),
                )
                .with_item(
                    cmd("Compiler", "Compile le projet", "cargo build")
                        .with_example("cargo build --release"),
                )
                .with_item(cmd("Lancer", "Compile et exécute", "cargo run"))
                .with_item(
                    cmd("Tester", "Lance les tests", "cargo test")
                        .with_example("cargo test -p mon-crate nom_du_test"),
                ),
        )
        .with_section(
            CheatsheetSection::new("Qualité")
                .with_item(cmd("Formater", "Formate le code", "cargo fmt"))
                .with_item(cmd("Linter", "Analyse statique avec Clippy", "cargo clippy --all-targets"))
                .with_item(cmd("Vérifier", "Vérifie la compilation sans produire de binaire", "cargo check")),
        )
        .with_section(
            CheatsheetSection::new("Dépendances")
                .with_item(cmd("Ajouter", "Ajoute une dépendance au Cargo.toml", "cargo add <crate>"))
                .with_item(cmd("Mettre à jour", "Met à jour le Cargo.lock", "cargo update")),
        )
}

pub(super) fn python_pip() -> Cheatsheet {
    Cheatsheet::new("Python/pip")
        .with_description("Interpréteur Python et installateur de paquets")
        .with_icon("code")
        .with_tags(&["python", "package-manager"])
        .with_section(
            CheatsheetSection::new("Environnements virtuels")
                .with_item(cmd("Créer", "Crée un environnement virtuel", "python -m venv .venv"))
                .with_item(
                    cmd("Activer", "Active l'environnement", "source .venv/bin/activate")
                        .with_example(".venv\\Scripts\\activate"),
                ),
        )
        .with_section(
            CheatsheetSection::new("Paquets")
                .with_item(
                    cmd("Installer", "Installe un paquet", "pip install <paquet>")
                        .with_example("pip install -r requirements.txt"),
                )
                .with_item(cmd("Geler", "Exporte les versions installées", "pip freeze > requirements.txt"))
                .with_item(cmd("Lister", "Liste les paquets installés", "pip list")),
        )
}
