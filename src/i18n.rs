//! User-facing strings in English and Spanish

use crate::core::HealthStatus;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Lang {
    #[default]
    En,
    Es,
}

/// Static text for one language
#[derive(Debug)]
pub(crate) struct Labels {
    pub(crate) our_pets: &'static str,
    pub(crate) pet_of_the_day: &'static str,
    pub(crate) no_pet_of_the_day: &'static str,
    pub(crate) no_pets_found: &'static str,
    pub(crate) name: &'static str,
    pub(crate) kind: &'static str,
    pub(crate) weight: &'static str,
    pub(crate) height: &'static str,
    pub(crate) length: &'static str,
    pub(crate) lives_left: &'static str,
    pub(crate) health: &'static str,
    pub(crate) photo: &'static str,
    pub(crate) about: &'static str,
    pub(crate) cat: &'static str,
    pub(crate) dog: &'static str,
    pub(crate) showing: &'static str,
    pub(crate) of: &'static str,
    pub(crate) pets: &'static str,
    pub(crate) page: &'static str,
    pub(crate) last_page: &'static str,
    pub(crate) prev_hint: &'static str,
    pub(crate) next_hint: &'static str,
    pub(crate) sorted_by: &'static str,
    pub(crate) reset_hint: &'static str,
    pub(crate) filters_reset: &'static str,
    pub(crate) unhealthy: &'static str,
    pub(crate) healthy: &'static str,
    pub(crate) very_healthy: &'static str,
}

const EN: Labels = Labels {
    our_pets: "Our pets",
    pet_of_the_day: "Pet of the day",
    no_pet_of_the_day: "No pets available to pick a pet of the day.",
    no_pets_found: "No pets found.",
    name: "Name",
    kind: "Kind",
    weight: "Weight",
    height: "Height",
    length: "Length",
    lives_left: "Lives left",
    health: "Health",
    photo: "Photo",
    about: "About",
    cat: "Cat",
    dog: "Dog",
    showing: "Showing",
    of: "of",
    pets: "pets",
    page: "page",
    last_page: "You are on the last page",
    prev_hint: "--prev: previous page",
    next_hint: "--next: next page",
    sorted_by: "Sorted by",
    reset_hint: "run `fever-pets reset` to restore the default order",
    filters_reset: "Filters reset to name ascending, page 1.",
    unhealthy: "Unhealthy",
    healthy: "Healthy",
    very_healthy: "Very Healthy",
};

const ES: Labels = Labels {
    our_pets: "Nuestras mascotas",
    pet_of_the_day: "Mascota del día",
    no_pet_of_the_day: "No hay mascotas para elegir la mascota del día.",
    no_pets_found: "No se encontraron mascotas.",
    name: "Nombre",
    kind: "Tipo",
    weight: "Peso",
    height: "Altura",
    length: "Longitud",
    lives_left: "Vidas restantes",
    health: "Salud",
    photo: "Foto",
    about: "Sobre",
    cat: "Gato",
    dog: "Perro",
    showing: "Mostrando",
    of: "de",
    pets: "mascotas",
    page: "página",
    last_page: "Estás en la última página",
    prev_hint: "--prev: página anterior",
    next_hint: "--next: página siguiente",
    sorted_by: "Ordenado por",
    reset_hint: "ejecuta `fever-pets reset` para volver al orden por defecto",
    filters_reset: "Filtros restablecidos: nombre ascendente, página 1.",
    unhealthy: "No saludable",
    healthy: "Saludable",
    very_healthy: "Muy saludable",
};

impl Lang {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Lang::En);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Lang::En);
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();
        match base.as_str() {
            "en" => Ok(Lang::En),
            "es" => Ok(Lang::Es),
            _ => Err(AppError::UnsupportedLanguage {
                input: trimmed.to_string(),
            }),
        }
    }

    pub(crate) fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
        }
    }
}

impl HealthStatus {
    pub(crate) fn label(self, lang: Lang) -> &'static str {
        let labels = lang.labels();
        match self {
            HealthStatus::Unhealthy => labels.unhealthy,
            HealthStatus::Healthy => labels.healthy,
            HealthStatus::VeryHealthy => labels.very_healthy,
        }
    }
}
