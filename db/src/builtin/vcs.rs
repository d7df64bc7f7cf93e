use cheatsheet_core::{Cheatsheet, CheatsheetItem, CheatsheetSection};

use super::cmd;

pub(super) fn git() -> Cheatsheet {
    Cheatsheet::new("Git")
        .with_description("Système de contrôle de version distribué")
        .with_icon("git-branch")
        .with_tags(&["version-control", "vcs"])
        .with_section(
            CheatsheetSection::new("Configuration")
                .with_item(
                    cmd(
                        "Identité",
                        "Définit le nom et l'email utilisés pour les commits",
                        "git config --global user.name \"Nom\"",
                    )
                    .with_example("git config --global user.email \"moi@example.com\""),
                )
                .with_item(cmd(
                    "Lister la configuration",
                    "Affiche toutes les valeurs de configuration effectives",
                    "git config --list",
                )),
        )
        .with_section(
            CheatsheetSection::new("Bases")
                .with_item(cmd("Initialiser", "Crée un nouveau dépôt local", "git init"))
                .with_item(
                    cmd("Cloner", "Copie un dépôt distant en local", "git clone <url>")
                        .with_example("git clone https://github.com/rust-lang/rust.git")
                        .with_example("git clone --depth 1 <url>"),
                )
                .with_item(cmd(
                    "Statut",
                    "Affiche l'état de l'arbre de travail",
                    "git status",
                ))
                .with_item(
                    cmd("Indexer", "Ajoute des modifications à l'index", "git add <fichier>")
                        .with_example("git add .")
                        .with_example("git add -p"),
                )
                .with_item(
                    cmd("Committer", "Enregistre l'index dans l'historique", "git commit -m \"message\"")
                        .with_example("git commit --amend"),
                ),
        )
        .with_section(
            CheatsheetSection::new("Branches")
                .with_item(cmd("Lister", "Liste les branches locales", "git branch"))
                .with_item(
                    cmd("Créer et basculer", "Crée une branche et s'y place", "git switch -c <branche>")
                        .with_example("git checkout -b feature/login"),
                )
                .with_item(cmd(
                    "Fusionner",
                    "Fusionne une branche dans la branche courante",
                    "git merge <branche>",
                ))
                .with_item(
                    cmd("Rebaser", "Rejoue les commits sur une autre base", "git rebase <base>")
                        .with_example("git rebase -i HEAD~3"),
                ),
        )
        .with_section(
            CheatsheetSection::new("Dépôts distants")
                .with_item(cmd("Récupérer", "Télécharge les objets distants", "git fetch"))
                .with_item(cmd(
                    "Tirer",
                    "Récupère et intègre les changements distants",
                    "git pull",
                ))
                .with_item(
                    cmd("Pousser", "Publie les commits locaux", "git push")
                        .with_example("git push -u origin main"),
                ),
        )
        .with_section(
            CheatsheetSection::new("Historique")
                .with_item(
                    cmd("Journal", "Affiche l'historique des commits", "git log --oneline --graph")
                        .with_example("git log -p <fichier>"),
                )
                .with_item(cmd("Différences", "Compare l'arbre de travail à l'index", "git diff"))
                .with_item(
                    CheatsheetItem::new(
                        "Remisage",
                        "Met de côté des modifications non committées",
                    )
                    .with_code("git stash")
                    .with_example("git stash pop")
                    .with_category("workflow"),
                ),
        )
}

pub(super) fn github_cli() -> Cheatsheet {
    Cheatsheet::new("GitHub CLI")
        .with_description("Interface en ligne de commande pour GitHub")
        .with_icon("github")
        .with_tags(&["version-control", "github", "cli"])
        .with_section(
            CheatsheetSection::new("Authentification")
                .with_item(cmd("Se connecter", "Authentifie gh auprès de GitHub", "gh auth login"))
                .with_item(cmd("Statut", "Affiche le compte connecté", "gh auth status")),
        )
        .with_section(
            CheatsheetSection::new("Pull requests")
                .with_item(
                    cmd("Créer", "Ouvre une pull request depuis la branche courante", "gh pr create")
                        .with_example("gh pr create --fill --draft"),
                )
                .with_item(cmd("Lister", "Liste les pull requests ouvertes", "gh pr list"))
                .with_item(cmd(
                    "Récupérer",
                    "Bascule sur la branche d'une pull request",
                    "gh pr checkout <numéro>",
                )),
        )
        .with_section(
            CheatsheetSection::new("Dépôts").with_item(
                cmd("Cloner", "Clone un dépôt GitHub", "gh repo clone <owner>/<repo>")
                    .with_example("gh repo clone cli/cli"),
            ),
        )
}
