use cheatsheet_core::{Cheatsheet, CheatsheetItem, CheatsheetSection};

use super::cmd;

pub(super) fn bash() -> Cheatsheet {
    Cheatsheet::new("Bash")
        .with_description("Shell Unix et langage de script")
        .with_icon("terminal")
        .with_tags(&["shell", "unix", "scripting"])
        .with_section(
            CheatsheetSection::new("Variables")
                .with_item(
                    cmd("Affecter", "Définit une variable (sans espaces)", "nom=\"valeur\"")
                        .with_example("echo \"$nom\""),
                )
                .with_item(cmd(
                    "Valeur par défaut",
                    "Utilise une valeur si la variable est vide",
                    "${nom:-defaut}",
                ))
                .with_item(cmd("Exporter", "Rend une variable visible aux sous-processus", "export NOM=valeur")),
        )
        .with_section(
            CheatsheetSection::new("Contrôle")
                .with_item(
                    cmd("Condition", "Teste une expression", "if [[ -f fichier ]]; then ...; fi")
                        .with_example("if [[ \"$a\" == \"$b\" ]]; then echo egal; fi"),
                )
                .with_item(
                    cmd("Boucle", "Itère sur une liste", "for x in a b c; do echo \"$x\"; done")
                        .with_example("for f in *.txt; do wc -l \"$f\"; done"),
                )
                .with_item(CheatsheetItem::new(
                    "Code de sortie",
                    "$? contient le code de la dernière commande, 0 signifie succès",
                )),
        )
        .with_section(
            CheatsheetSection::new("Redirections")
                .with_item(cmd("Rediriger la sortie", "Écrit stdout dans un fichier", "cmd > fichier"))
                .with_item(cmd("Ajouter", "Ajoute stdout à la fin d'un fichier", "cmd >> fichier"))
                .with_item(cmd("Fusionner stderr", "Redirige stderr vers stdout", "cmd 2>&1"))
                .with_item(
                    cmd("Tube", "Envoie la sortie d'une commande à une autre", "cmd1 | cmd2")
                        .with_example("ps aux | grep nginx"),
                ),
        )
}

pub(super) fn linux() -> Cheatsheet {
    Cheatsheet::new("Linux")
        .with_description("Commandes essentielles du système")
        .with_icon("server")
        .with_tags(&["shell", "unix", "system"])
        .with_section(
            CheatsheetSection::new("Fichiers")
                .with_item(
                    cmd("Lister", "Liste le contenu d'un dossier", "ls -la")
                        .with_example("ls -lh /var/log"),
                )
                .with_item(
                    cmd("Chercher", "Recherche des fichiers par nom", "find . -name \"*.rs\"")
                        .with_example("find /tmp -mtime +7 -delete"),
                )
                .with_item(
                    cmd("Rechercher du texte", "Cherche un motif dans des fichiers", "grep -rn \"motif\" .")
                        .with_example("grep -i error app.log"),
                )
                .with_item(cmd("Permissions", "Modifie les droits d'un fichier", "chmod 755 <fichier>")),
        )
        .with_section(
            CheatsheetSection::new("Processus")
                .with_item(cmd("Lister", "Affiche tous les processus", "ps aux"))
                .with_item(cmd("Surveiller", "Moniteur interactif", "top"))
                .with_item(cmd("Terminer", "Envoie un signal à un processus", "kill -9 <pid>")),
        )
        .with_section(
            CheatsheetSection::new("Disque")
                .with_item(cmd("Espace libre", "Affiche l'occupation des systèmes de fichiers", "df -h"))
                .with_item(cmd("Taille", "Taille d'un dossier", "du -sh <dossier>")),
        )
}
