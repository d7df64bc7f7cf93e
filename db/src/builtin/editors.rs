use cheatsheet_core::{Cheatsheet, CheatsheetItem, CheatsheetSection};

use super::cmd;

pub(super) fn vim() -> Cheatsheet {
    Cheatsheet::new("Vim")
        .with_description("Éditeur de texte modal")
        .with_icon("edit")
        .with_tags(&["editor", "unix"])
        .with_section(
            CheatsheetSection::new("Modes")
                .with_item(cmd("Insertion", "Passe en mode insertion", "i"))
                .with_item(cmd("Normal", "Revient au mode normal", "Esc"))
                .with_item(cmd("Visuel", "Sélectionne du texte", "v")),
        )
        .with_section(
            CheatsheetSection::new("Fichiers")
                .with_item(cmd("Enregistrer", "Écrit le fichier", ":w"))
                .with_item(cmd("Quitter", "Quitte l'éditeur", ":q"))
                .with_item(cmd("Forcer", "Quitte sans enregistrer", ":q!")),
        )
        .with_section(
            CheatsheetSection::new("Édition")
                .with_item(cmd("Supprimer une ligne", "Coupe la ligne courante", "dd"))
                .with_item(cmd("Copier une ligne", "Copie la ligne courante", "yy"))
                .with_item(cmd("Coller", "Colle après le curseur", "p"))
                .with_item(
                    cmd("Remplacer", "Remplace dans tout le fichier", ":%s/ancien/nouveau/g")
                        .with_example(":%s/foo/bar/gc"),
                )
                .with_item(CheatsheetItem::new(
                    "Annuler / rétablir",
                    "u annule, Ctrl-r rétablit",
                )),
        )
}
