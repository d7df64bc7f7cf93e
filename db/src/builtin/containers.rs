use cheatsheet_core::{Cheatsheet, CheatsheetSection};

use super::cmd;

pub(super) fn docker() -> Cheatsheet {
    Cheatsheet::new("Docker")
        .with_description("Plateforme de conteneurisation d'applications")
        .with_icon("container")
        .with_tags(&["containers", "devops"])
        .with_section(
            CheatsheetSection::new("Images")
                .with_item(cmd("Lister", "Liste les images locales", "docker images"))
                .with_item(
                    cmd("Construire", "Construit une image depuis un Dockerfile", "docker build -t <nom> .")
                        .with_example("docker build -t app:latest .")
                        .with_example("docker build --no-cache -t app ."),
                )
                .with_item(cmd("Télécharger", "Récupère une image d'un registre", "docker pull <image>"))
                .with_item(cmd("Supprimer", "Supprime une image locale", "docker rmi <image>")),
        )
        .with_section(
            CheatsheetSection::new("Conteneurs")
                .with_item(
                    cmd("Lancer", "Crée et démarre un conteneur", "docker run <image>")
                        .with_example("docker run -d -p 8080:80 nginx")
                        .with_example("docker run --rm -it ubuntu bash"),
                )
                .with_item(
                    cmd("Lister", "Liste les conteneurs en cours d'exécution", "docker ps")
                        .with_example("docker ps -a"),
                )
                .with_item(cmd("Arrêter", "Arrête un conteneur", "docker stop <conteneur>"))
                .with_item(
                    cmd("Journaux", "Affiche les logs d'un conteneur", "docker logs <conteneur>")
                        .with_example("docker logs -f --tail 100 web"),
                )
                .with_item(cmd(
                    "Exécuter",
                    "Lance une commande dans un conteneur actif",
                    "docker exec -it <conteneur> sh",
                )),
        )
        .with_section(
            CheatsheetSection::new("Nettoyage").with_item(cmd(
                "Purger",
                "Supprime les ressources inutilisées",
                "docker system prune",
            )),
        )
}

pub(super) fn docker_compose() -> Cheatsheet {
    Cheatsheet::new("Docker Compose")
        .with_description("Orchestration de conteneurs multi-services")
        .with_icon("container")
        .with_tags(&["containers", "devops", "orchestration"])
        .with_section(
            CheatsheetSection::new("Cycle de vie")
                .with_item(
                    cmd("Démarrer", "Démarre tous les services", "docker compose up")
                        .with_example("docker compose up -d --build"),
                )
                .with_item(cmd("Arrêter", "Arrête et supprime les services", "docker compose down"))
                .with_item(cmd("Statut", "Liste les services", "docker compose ps")),
        )
        .with_section(
            CheatsheetSection::new("Débogage")
                .with_item(cmd("Journaux", "Suit les logs des services", "docker compose logs -f"))
                .with_item(cmd(
                    "Shell",
                    "Ouvre un shell dans un service",
                    "docker compose exec <service> sh",
                )),
        )
}

pub(super) fn kubectl() -> Cheatsheet {
    Cheatsheet::new("Kubernetes (kubectl)")
        .with_description("Client en ligne de commande pour les clusters Kubernetes")
        .with_icon("cloud")
        .with_tags(&["containers", "devops", "orchestration", "cloud"])
        .with_section(
            CheatsheetSection::new("Ressources")
                .with_item(
                    cmd("Lister", "Liste les ressources d'un type", "kubectl get <type>")
                        .with_example("kubectl get pods -A")
                        .with_example("kubectl get deploy -o wide"),
                )
                .with_item(cmd(
                    "Décrire",
                    "Affiche le détail d'une ressource",
                    "kubectl describe <type> <nom>",
                ))
                .with_item(cmd("Appliquer", "Applique un manifeste", "kubectl apply -f <fichier>")),
        )
        .with_section(
            CheatsheetSection::new("Pods")
                .with_item(cmd("Journaux", "Affiche les logs d'un pod", "kubectl logs <pod>"))
                .with_item(cmd(
                    "Shell",
                    "Ouvre un shell dans un pod",
                    "kubectl exec -it <pod> -- sh",
                ))
                .with_item(cmd(
                    "Redirection de port",
                    "Expose un port du pod en local",
                    "kubectl port-forward <pod> 8080:80",
                )),
        )
        .with_section(
            CheatsheetSection::new("Contexte").with_item(cmd(
                "Changer de contexte",
                "Sélectionne le cluster cible",
                "kubectl config use-context <contexte>",
            )),
        )
}
