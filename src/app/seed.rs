//! Default site content written into empty collections on startup.
//!
//! Each collection is checked on its own: one that already holds documents is
//! left alone, so running this again never duplicates anything. It is not
//! transactional across collections.

use crate::app::portfolio_service::PortfolioService;
use crate::domain::model::{Category, Photographer, Resource, Service, Testimonial};
use crate::domain::{Repository, RepositoryResult};

/// Collections that were empty and received default content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

pub fn default_photographer() -> Vec<(&'static str, Photographer)> {
    vec![(
        "photographer-1",
        Photographer {
            name: "Alex Dubois".to_string(),
            bio: "Photographe passionné spécialisé dans la capture d'émotions authentiques. Mon approche artistique mélange spontanéité et composition soignée pour créer des images qui racontent votre histoire unique.".to_string(),
            experience: "5+ années d'expérience".to_string(),
            location: "Paris & région parisienne".to_string(),
            email: "contact@alexdubois-photo.fr".to_string(),
            phone: "+33 6 12 34 56 78".to_string(),
        },
    )]
}

fn category(name: &str, description: &str, order: i64) -> Category {
    Category {
        name: name.to_string(),
        description: description.to_string(),
        cover_image: Some(String::new()),
        order,
        is_active: true,
    }
}

pub fn default_categories() -> Vec<(&'static str, Category)> {
    vec![
        (
            "mariage",
            category(
                "Mariage",
                "Capturer les moments les plus précieux de votre journée spéciale",
                1,
            ),
        ),
        (
            "nature",
            category("Nature", "La beauté naturelle à travers mon objectif", 2),
        ),
        (
            "nourriture",
            category("Nourritures", "Sublimer vos créations culinaires", 3),
        ),
    ]
}

pub fn default_testimonials() -> Vec<(&'static str, Testimonial)> {
    vec![
        (
            "testimonial-1",
            Testimonial {
                name: "Marie & Thomas".to_string(),
                text: "Alex a su capturer l'essence de notre mariage avec une sensibilité artistique exceptionnelle. Chaque photo raconte notre histoire.".to_string(),
                category: Some("mariage".to_string()),
                is_visible: true,
                order: 1,
            },
        ),
        (
            "testimonial-2",
            Testimonial {
                name: "Restaurant La Belle Époque".to_string(),
                text: "Les photos culinaires d'Alex subliment nos plats. Son œil artistique met parfaitement en valeur notre cuisine.".to_string(),
                category: Some("nourriture".to_string()),
                is_visible: true,
                order: 2,
            },
        ),
    ]
}

fn service(name: &str, description: &str, price: &str, duration: &str, order: i64) -> Service {
    Service {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        duration: duration.to_string(),
        is_active: true,
        order,
    }
}

pub fn default_services() -> Vec<(&'static str, Service)> {
    vec![
        (
            "service-1",
            service(
                "Photographie de Mariage",
                "Reportage complet de votre journée spéciale",
                "À partir de 1200€",
                "Journée complète",
                1,
            ),
        ),
        (
            "service-2",
            service(
                "Séance Nature",
                "Capture de paysages et moments naturels",
                "À partir de 300€",
                "2-3 heures",
                2,
            ),
        ),
        (
            "service-3",
            service(
                "Photographie Culinaire",
                "Mise en valeur de vos créations gastronomiques",
                "À partir de 400€",
                "Demi-journée",
                3,
            ),
        ),
    ]
}

/// Inserts `defaults` when the collection is empty. Returns whether it did.
async fn seed_collection<R: Resource>(
    repo: &Repository<R>,
    defaults: Vec<(&'static str, R)>,
) -> RepositoryResult<bool> {
    if !repo.is_empty().await? {
        return Ok(false);
    }
    for (id, data) in defaults {
        repo.insert_with_id(id, data).await?;
    }
    tracing::info!(collection = R::COLLECTION, "initialized default data");
    Ok(true)
}

pub async fn seed_defaults(service: &PortfolioService) -> RepositoryResult<SeedReport> {
    let mut report = SeedReport::default();

    if seed_collection(&service.photographer, default_photographer()).await? {
        report.seeded.push(Photographer::COLLECTION);
    }
    if seed_collection(&service.categories, default_categories()).await? {
        report.seeded.push(Category::COLLECTION);
    }
    if seed_collection(&service.testimonials, default_testimonials()).await? {
        report.seeded.push(Testimonial::COLLECTION);
    }
    if seed_collection(&service.services, default_services()).await? {
        report.seeded.push(Service::COLLECTION);
    }

    Ok(report)
}
