//! Built-in site content.

use crate::models::{Course, CourseTeaser, Landing, Resource, ResourceKind, Session, SocialLink};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn courses() -> Vec<Course> {
    vec![Course {
        id: 1,
        year: "2025".to_string(),
        level: "Básico".to_string(),
        title: "Desarrollo Web con Python".to_string(),
        description: "Domina hooks personalizados, patrones de renderizado y optimización de performance en aplicaciones React de gran escala.".to_string(),
        tech: strings(&["TypeScript", "HTML", "CSS", "React", "Python"]),
        duration: "4 semanas".to_string(),
        students: "Limitado".to_string(),
        instructor: "Desarrollador Web Jose Santos".to_string(),
        start_date: Some("18 de Noviembre de 2025".to_string()),
        schedule: Some("Martes y Jueves de 7:00 PM a 10:00 PM".to_string()),
    }]
}

fn session(
    id: u32,
    date: &str,
    title: &str,
    description: &str,
    topics: &[&str],
    resources: Option<Vec<Resource>>,
) -> Session {
    Session {
        id,
        date: date.to_string(),
        duration: "2 horas".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        instructor: "Ing. José".to_string(),
        topics: strings(topics),
        resources,
    }
}

fn resource(title: &str, url: &str, kind: ResourceKind) -> Resource {
    Resource {
        title: title.to_string(),
        url: url.to_string(),
        kind,
    }
}

pub fn sessions() -> Vec<Session> {
    vec![
        session(
            1,
            "2025-01-15",
            "Fundamentos del Desarrollo Web",
            "Introducción a las principales tecnologías y funcionamiento de aplicaciones web modernas.",
            &[
                "Principales tecnologías web: HTML, CSS, Frameworks",
                "Frameworks de Backend y Frontend",
                "Herramientas en la nube",
                "Funcionamiento de las aplicaciones web",
            ],
            None,
        ),
        session(
            2,
            "2025-01-17",
            "Python - Fundamentos",
            "Lenguaje de programación versátil para desarrollo web, ciencia de datos y machine learning.",
            &[
                "Introducción a Python",
                "Principales estructuras en Python",
                "Programación orientada a objetos",
                "Módulos y librerías",
            ],
            Some(vec![
                resource(
                    "Tutorial oficial de Python",
                    "https://docs.python.org/es/3/tutorial/",
                    ResourceKind::Link,
                ),
                resource(
                    "Guía de estilo PEP 8",
                    "https://peps.python.org/pep-0008/",
                    ResourceKind::Pdf,
                ),
            ]),
        ),
        session(
            3,
            "2025-01-22",
            "Control de Versiones con Git",
            "Herramientas esenciales para documentar proyectos y colaborar en equipos.",
            &[
                "Control de versiones con Git",
                "Trabajo con ramas",
                "Repositorios en la nube: Github",
                "Integración Git/Github",
            ],
            Some(vec![
                resource("Pro Git", "https://git-scm.com/book/es/v2", ResourceKind::Link),
                resource(
                    "Repositorio del curso",
                    "https://github.com/daylerjeff199906",
                    ResourceKind::Github,
                ),
            ]),
        ),
        session(
            4,
            "2025-01-24",
            "CSS y Estilos Web",
            "Fundamentos de diseño y estilos para interfaces web modernas.",
            &[
                "Estilos en CSS",
                "Selectores y prioridad en CSS",
                "Bootstrap y clases CSS",
                "Diseño responsive",
            ],
            None,
        ),
        session(
            5,
            "2025-01-29",
            "CSS Avanzado y Frameworks",
            "Profundización en técnicas avanzadas de CSS y uso de frameworks.",
            &[
                "CSS Grid y Flexbox",
                "Animaciones y transiciones",
                "Frameworks CSS modernos",
                "Buenas prácticas en CSS",
            ],
            None,
        ),
        session(
            6,
            "2025-01-31",
            "Django - Backend con Python",
            "Framework robusto para desarrollo de aplicaciones escalables.",
            &[
                "Estructura y configuración de Django",
                "Aplicaciones básicas y renderizado HTML",
                "Archivos estáticos y estilos",
                "Contexto en vistas y flujo de datos",
            ],
            Some(vec![resource(
                "Tutorial de Django en video",
                "https://www.youtube.com/results?search_query=django+tutorial",
                ResourceKind::Video,
            )]),
        ),
        session(
            7,
            "2025-02-05",
            "Bases de Datos con MySQL",
            "Integración de bases de datos SQL con aplicaciones Django.",
            &[
                "Sentencias SQL fundamentales",
                "Configuración de BD en Django",
                "Django ORM y queries",
                "Modelos y migraciones",
            ],
            None,
        ),
        session(
            8,
            "2025-02-07",
            "JavaScript y React",
            "Desarrollo frontend moderno con JavaScript y React.",
            &[
                "JavaScript: variables y estructuras",
                "Manipulación del DOM",
                "Conceptos de React: estados y componentes",
                "Integración React con Django",
            ],
            None,
        ),
    ]
}

pub fn landing() -> Landing {
    Landing {
        services: strings(&[
            "Aplicaciones modernas y escalables",
            "Arquitectura y mejores prácticas",
            "Formación de equipos y desarrolladores",
        ]),
        technologies: strings(&["React", "TypeScript", "Next.js", "Node.js", "AWS", "PostgreSQL"]),
        teasers: vec![CourseTeaser {
            year: "2025".to_string(),
            level: "Básico".to_string(),
            title: "Desarrollo Web con Python".to_string(),
            description: "Domina hooks personalizados, patrones de renderizado y optimización de performance en aplicaciones React de gran escala.".to_string(),
            tech: strings(&["TypeScript", "HTML", "CSS", "React", "Python"]),
            duration: "4 semanas".to_string(),
            students: "Limitado".to_string(),
        }],
        email: "daylersan@gmail.com".to_string(),
        socials: vec![
            SocialLink {
                name: "GitHub".to_string(),
                handle: "@daylerjeff199906".to_string(),
                url: "https://github.com/daylerjeff199906".to_string(),
                description: "Proyectos y código".to_string(),
            },
            SocialLink {
                name: "LinkedIn".to_string(),
                handle: "José Jefferson Santos Panaifo".to_string(),
                url: "https://www.linkedin.com/in/jos%C3%A9-jefferson-santos-panaifo-3668a7246/".to_string(),
                description: "Experiencia profesional".to_string(),
            },
        ],
    }
}
