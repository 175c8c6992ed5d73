//! User-facing strings in both supported languages.
//!
//! `{name}`-style placeholders are filled in by the caller with `str::replace`.

use crate::locale::Localized;

pub const WELCOME: Localized = Localized::new(
    "Welcome to {name}'s SRE terminal portfolio",
    "Bienvenido al portfolio terminal de {name}",
);
pub const HELP_TIP: Localized = Localized::new(
    "Type help if you need help to explore what you can do here",
    "Escribe help si necesitas ayuda para explorar lo que puedes hacer aquí",
);
pub const TRY_NEOFETCH: Localized = Localized::new(
    "Or try neofetch for a quick overview",
    "O prueba neofetch para una vista rápida",
);
pub const CHANGE_LANGUAGE: Localized = Localized::new("Change language:", "Cambiar idioma:");

pub const AVAILABLE_COMMANDS: Localized =
    Localized::new("AVAILABLE COMMANDS", "COMANDOS DISPONIBLES");
pub const KEYS_TIP: Localized = Localized::new(
    "Tip: Tab=autocomplete, ↑↓=history, Ctrl+C=cancel, Ctrl+L=clear",
    "Tip: Tab=autocompletado, ↑↓=historial, Ctrl+C=cancelar, Ctrl+L=limpiar",
);

pub const CMD_NOT_FOUND: Localized = Localized::new("Command not found", "Comando no encontrado");
pub const FOR_HELP: Localized = Localized::new(
    "Type help for available commands.",
    "Escribe help para ver comandos disponibles.",
);
pub const DID_YOU_MEAN: Localized = Localized::new("Did you mean", "¿Quisiste decir");
pub const NO_SUCH_FILE: Localized =
    Localized::new("No such file or directory", "No existe el archivo o directorio");
pub const UNKNOWN_ARGUMENT: Localized = Localized::new("unknown argument", "argumento desconocido");
pub const USAGE: Localized = Localized::new("Usage", "Uso");

pub const LANGUAGE_CHANGED: Localized =
    Localized::new("✓ Language changed to English", "✓ Idioma cambiado a Español");
pub const CURRENT: Localized = Localized::new("Current", "Actual");

pub const BACK_TO_PORTFOLIO: Localized =
    Localized::new("Returning to portfolio...", "Volviendo al portfolio...");

pub const TECHNICAL_SKILLS: Localized = Localized::new("Technical Skills", "Habilidades Técnicas");
pub const PERSONAL_PROJECTS: Localized =
    Localized::new("Personal Projects", "Proyectos Personales");
pub const CERTIFICATIONS: Localized = Localized::new("Certifications", "Certificaciones");
pub const CONTACT_INFO: Localized =
    Localized::new("Contact Information", "Información de Contacto");

pub const ROLE: Localized = Localized::new("Role", "Rol");
pub const COMPANY: Localized = Localized::new("Company", "Empresa");
pub const LOCATION: Localized = Localized::new("Location", "Ubicación");
pub const UPTIME: Localized = Localized::new("Uptime", "Uptime");
pub const DAYS: Localized = Localized::new("days", "días");
pub const PERIOD: Localized = Localized::new("Period", "Periodo");
pub const NAMESPACE: Localized = Localized::new("Namespace", "Namespace");
pub const DESCRIPTION: Localized = Localized::new("Description", "Descripción");
pub const TAGS: Localized = Localized::new("Tags", "Tags");

pub const TRIGGERING_INCIDENT: Localized = Localized::new(
    "🚨 TRIGGERING INCIDENT SIMULATION...",
    "🚨 INICIANDO SIMULACIÓN DE INCIDENTE...",
);
pub const INCIDENT_NEXT_STEPS: Localized = Localized::new(
    "Type 'investigate' to dig in or 'resolve' to close it.",
    "Escribe 'investigate' para analizarlo o 'resolve' para cerrarlo.",
);
pub const INCIDENT_ALREADY_ACTIVE: Localized = Localized::new(
    "Incident already active. Use 'investigate' or 'resolve'.",
    "Ya hay un incidente activo. Usa 'investigate' o 'resolve'.",
);
pub const INCIDENT_AWAITING_ACK: Localized = Localized::new(
    "The last incident is still being closed out. Try again in a moment.",
    "El último incidente aún se está cerrando. Intenta de nuevo en un momento.",
);
pub const INVESTIGATING: Localized =
    Localized::new("Investigating incident...", "Investigando incidente...");
pub const ANALYZING: Localized = Localized::new(
    "Analyzing logs, metrics, and traces...",
    "Analizando logs, métricas y trazas...",
);
pub const NOTHING_TO_INVESTIGATE: Localized = Localized::new(
    "No active incident to investigate.",
    "No hay un incidente activo para investigar.",
);
pub const INCIDENT_RESOLVED: Localized =
    Localized::new("✅ Incident resolved!", "✅ ¡Incidente resuelto!");
pub const TOTAL_RESOLVED: Localized =
    Localized::new("Total incidents resolved", "Total de incidentes resueltos");
pub const NOTHING_TO_RESOLVE: Localized = Localized::new(
    "No active incident to resolve.",
    "No hay un incidente activo para resolver.",
);
