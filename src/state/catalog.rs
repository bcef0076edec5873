// Application catalog
// Static registry of suite applications, their display metadata and modules

/// Icon reference for apps and modules
/// The UI layer maps each variant to a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Users,
    File,
    Chart,
    Calendar,
    Message,
    Cart,
    Settings,
}

/// Color theme of an application card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentColor {
    Blue,
    Purple,
    Amber,
    Emerald,
    Rose,
    Cyan,
    Indigo,
    Slate,
}

/// A navigation entry in the layout sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: &'static str,
    pub icon: Icon,
}

/// Display metadata for one application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Identifier used in `/app/:appId`
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: AccentColor,
    /// Sidebar modules, empty for apps without any
    pub modules: &'static [ModuleDescriptor],
}

const fn module(name: &'static str, icon: Icon) -> ModuleDescriptor {
    ModuleDescriptor { name, icon }
}

/// Entry used for ids missing from the catalog
pub const FALLBACK: AppDescriptor = AppDescriptor {
    id: "",
    title: "Aplicación",
    description: "Selecciona una aplicación válida",
    icon: Icon::Dashboard,
    color: AccentColor::Slate,
    modules: &[],
};

/// All applications, in picker order
pub static APPS: &[AppDescriptor] = &[
    AppDescriptor {
        id: "dashboard",
        title: "Dashboard",
        description: "Panel de control principal",
        icon: Icon::Dashboard,
        color: AccentColor::Blue,
        modules: &[],
    },
    AppDescriptor {
        id: "users",
        title: "Usuarios",
        description: "Gestión de usuarios",
        icon: Icon::Users,
        color: AccentColor::Purple,
        modules: &[],
    },
    AppDescriptor {
        id: "documents",
        title: "Documentos",
        description: "Gestión documental",
        icon: Icon::File,
        color: AccentColor::Amber,
        modules: &[],
    },
    AppDescriptor {
        id: "analytics",
        title: "Análisis",
        description: "Reportes y estadísticas",
        icon: Icon::Chart,
        color: AccentColor::Emerald,
        modules: &[],
    },
    AppDescriptor {
        id: "calendar",
        title: "Calendario",
        description: "Agenda y eventos",
        icon: Icon::Calendar,
        color: AccentColor::Rose,
        modules: &[],
    },
    AppDescriptor {
        id: "messages",
        title: "Mensajes",
        description: "Comunicación interna",
        icon: Icon::Message,
        color: AccentColor::Cyan,
        modules: &[],
    },
    AppDescriptor {
        id: "sales",
        title: "Ventas",
        description: "Sistema de ventas",
        icon: Icon::Cart,
        color: AccentColor::Indigo,
        modules: &[],
    },
    AppDescriptor {
        id: "settings",
        title: "Configuración",
        description: "Ajustes del sistema",
        icon: Icon::Settings,
        color: AccentColor::Slate,
        modules: &[],
    },
    AppDescriptor {
        id: "capacitaciones",
        title: "Capacitaciones",
        description: "Sistema de gestión de capacitaciones y certificados",
        icon: Icon::Dashboard,
        color: AccentColor::Blue,
        modules: &[
            module("Cursos", Icon::File),
            module("Asistencias", Icon::Users),
            module("Certificados", Icon::File),
            module("Calendario", Icon::Calendar),
        ],
    },
    AppDescriptor {
        id: "matriz",
        title: "Matriz de Cargos",
        description: "Gestión de perfiles y competencias laborales",
        icon: Icon::Users,
        color: AccentColor::Purple,
        modules: &[
            module("Cargos", Icon::Users),
            module("Competencias", Icon::Chart),
            module("Evaluaciones", Icon::File),
        ],
    },
    AppDescriptor {
        id: "requisicion",
        title: "Requisición",
        description: "Sistema de requisiciones y aprobaciones",
        icon: Icon::File,
        color: AccentColor::Amber,
        modules: &[
            module("Solicitudes", Icon::File),
            module("Aprobaciones", Icon::Settings),
            module("Historial", Icon::Chart),
        ],
    },
    AppDescriptor {
        id: "evaluacion",
        title: "Evaluación",
        description: "Evaluación de desempeño del personal",
        icon: Icon::Chart,
        color: AccentColor::Emerald,
        modules: &[
            module("Evaluaciones", Icon::Chart),
            module("Resultados", Icon::File),
            module("Reportes", Icon::Chart),
        ],
    },
    AppDescriptor {
        id: "nomina",
        title: "Nómina",
        description: "Gestión de nómina y pagos",
        icon: Icon::Cart,
        color: AccentColor::Indigo,
        modules: &[
            module("Empleados", Icon::Users),
            module("Pagos", Icon::Cart),
            module("Reportes", Icon::Chart),
        ],
    },
    AppDescriptor {
        id: "reportes",
        title: "Reportes",
        description: "Centro de reportes y análisis",
        icon: Icon::Chart,
        color: AccentColor::Cyan,
        modules: &[
            module("Dashboard", Icon::Dashboard),
            module("Análisis", Icon::Chart),
            module("Exportar", Icon::File),
        ],
    },
];

/// Read-only view over the application registry
///
/// Every screen that shows app metadata goes through this type so the
/// picker, layout and app page never disagree.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    apps: &'static [AppDescriptor],
}

impl Default for Catalog {
    fn default() -> Self {
        Self { apps: APPS }
    }
}

impl Catalog {
    /// Catalog over the built-in application list
    pub fn new() -> Self {
        Self::default()
    }

    /// All applications in insertion order
    pub fn apps(&self) -> &'static [AppDescriptor] {
        self.apps
    }

    /// Look up an application by id
    pub fn get(&self, id: &str) -> Option<&'static AppDescriptor> {
        self.apps.iter().find(|app| app.id == id)
    }

    /// Look up an application, falling back to the generic entry
    /// `None` (no app in the route) also resolves to the fallback
    pub fn resolve(&self, id: Option<&str>) -> &'static AppDescriptor {
        id.and_then(|id| self.get(id)).unwrap_or(&FALLBACK)
    }

    /// Sidebar modules for an application, empty if the id is unknown
    pub fn modules(&self, id: Option<&str>) -> &'static [ModuleDescriptor] {
        self.resolve(id).modules
    }

    /// Number of registered applications
    pub fn len(&self) -> usize {
        self.apps.len()
    }
}
