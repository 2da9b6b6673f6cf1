//! Built-in model templates.
//!
//! Each template is a complete snapshot conforming to the export shape and
//! loads through the ordinary import path.

use super::model::{Field, ModelSnapshot, RelationKind, Relationship, Table};

/// Catalog entry describing one built-in template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The built-in template catalog.
pub fn template_catalog() -> &'static [TemplateInfo] {
    &[
        TemplateInfo {
            id: "customer-management",
            name: "Customer Management",
            description: "Companies, contacts, and deals for a simple CRM",
        },
        TemplateInfo {
            id: "task-management",
            name: "Task Management",
            description: "Projects, tasks, and members with assignments",
        },
        TemplateInfo {
            id: "content-management",
            name: "Content Management",
            description: "Posts, authors, and categories for a publishing flow",
        },
    ]
}

/// Build the snapshot for a catalog id. Returns `None` for unknown ids.
pub fn template_snapshot(id: &str) -> Option<ModelSnapshot> {
    match id {
        "customer-management" => Some(customer_management()),
        "task-management" => Some(task_management()),
        "content-management" => Some(content_management()),
        _ => None,
    }
}

fn customer_management() -> ModelSnapshot {
    let companies = Table::new("tbl_companies", "Companies")
        .with_position(80.0, 80.0)
        .with_field(Field::new("fld_companies_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_companies_name", "name", "text").required())
        .with_field(Field::new("fld_companies_website", "website", "url"))
        .with_field(Field::new("fld_companies_industry", "industry", "select"));

    let contacts = Table::new("tbl_contacts", "Contacts")
        .with_position(460.0, 80.0)
        .with_field(Field::new("fld_contacts_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_contacts_name", "name", "text").required())
        .with_field(Field::new("fld_contacts_email", "email", "email").unique())
        .with_field(Field::new("fld_contacts_phone", "phone", "phone"))
        .with_field(Field::new("fld_contacts_company", "company", "reference"));

    let deals = Table::new("tbl_deals", "Deals")
        .with_position(460.0, 400.0)
        .with_field(Field::new("fld_deals_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_deals_title", "title", "text").required())
        .with_field(Field::new("fld_deals_amount", "amount", "currency"))
        .with_field(Field::new("fld_deals_stage", "stage", "status"))
        .with_field(Field::new("fld_deals_close_date", "close date", "date"))
        .with_field(Field::new("fld_deals_contact", "contact", "reference"));

    ModelSnapshot {
        tables: vec![companies, contacts, deals],
        relationships: vec![
            Relationship::new(
                "rel_contacts_companies",
                "tbl_contacts",
                "fld_contacts_company",
                "tbl_companies",
            )
            .with_relation(RelationKind::ManyToOne),
            Relationship::new(
                "rel_deals_contacts",
                "tbl_deals",
                "fld_deals_contact",
                "tbl_contacts",
            )
            .with_relation(RelationKind::ManyToOne),
        ],
        ..Default::default()
    }
}

fn task_management() -> ModelSnapshot {
    let projects = Table::new("tbl_projects", "Projects")
        .with_position(80.0, 80.0)
        .with_field(Field::new("fld_projects_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_projects_name", "name", "text").required())
        .with_field(Field::new("fld_projects_status", "status", "status"))
        .with_field(Field::new("fld_projects_due", "due date", "date"));

    let tasks = Table::new("tbl_tasks", "Tasks")
        .with_position(460.0, 80.0)
        .with_field(Field::new("fld_tasks_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_tasks_title", "title", "text").required())
        .with_field(Field::new("fld_tasks_done", "done", "boolean"))
        .with_field(Field::new("fld_tasks_priority", "priority", "select"))
        .with_field(Field::new("fld_tasks_project", "project", "reference"))
        .with_field(Field::new("fld_tasks_assignee", "assignee", "reference"));

    let members = Table::new("tbl_members", "Members")
        .with_position(80.0, 400.0)
        .with_field(Field::new("fld_members_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_members_name", "name", "text").required())
        .with_field(Field::new("fld_members_email", "email", "email").unique())
        .with_field(Field::new("fld_members_role", "role", "select"));

    ModelSnapshot {
        tables: vec![projects, tasks, members],
        relationships: vec![
            Relationship::new(
                "rel_tasks_projects",
                "tbl_tasks",
                "fld_tasks_project",
                "tbl_projects",
            )
            .with_relation(RelationKind::ManyToOne),
            Relationship::new(
                "rel_tasks_members",
                "tbl_tasks",
                "fld_tasks_assignee",
                "tbl_members",
            )
            .with_relation(RelationKind::ManyToOne),
        ],
        ..Default::default()
    }
}

fn content_management() -> ModelSnapshot {
    let posts = Table::new("tbl_posts", "Posts")
        .with_position(80.0, 80.0)
        .with_field(Field::new("fld_posts_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_posts_title", "title", "text").required())
        .with_field(Field::new("fld_posts_body", "body", "longText"))
        .with_field(Field::new("fld_posts_published", "published", "boolean"))
        .with_field(Field::new("fld_posts_published_at", "published at", "dateTime"))
        .with_field(Field::new("fld_posts_author", "author", "reference"))
        .with_field(Field::new("fld_posts_category", "category", "reference"));

    let authors = Table::new("tbl_authors", "Authors")
        .with_position(460.0, 80.0)
        .with_field(Field::new("fld_authors_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_authors_name", "name", "text").required())
        .with_field(Field::new("fld_authors_bio", "bio", "longText"))
        .with_field(Field::new("fld_authors_avatar", "avatar", "image"));

    let categories = Table::new("tbl_categories", "Categories")
        .with_position(460.0, 380.0)
        .with_field(Field::new("fld_categories_id", "id", "id").primary().unique())
        .with_field(Field::new("fld_categories_name", "name", "text").required().unique())
        .with_field(Field::new("fld_categories_slug", "slug", "text").unique());

    ModelSnapshot {
        tables: vec![posts, authors, categories],
        relationships: vec![
            Relationship::new(
                "rel_posts_authors",
                "tbl_posts",
                "fld_posts_author",
                "tbl_authors",
            )
            .with_relation(RelationKind::ManyToOne),
            Relationship::new(
                "rel_posts_categories",
                "tbl_posts",
                "fld_posts_category",
                "tbl_categories",
            )
            .with_relation(RelationKind::ManyToOne),
        ],
        ..Default::default()
    }
}
