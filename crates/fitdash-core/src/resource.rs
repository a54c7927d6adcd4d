//! Static descriptions of the resource collections fitdash displays.
//!
//! Every surface works off the same generic view machinery; a resource
//! contributes only its name, its API path, and a column schema. Adding a
//! resource means adding one [`ResourceSpec`] here and listing it in [`ALL`].

/// How a cell renders the field value it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Plain text; an absent or null value renders the fallback verbatim.
    Text {
        /// Shown when the field is absent or null (e.g. `"N/A"`).
        fallback: &'static str,
    },
    /// Numeric; an absent or null value renders as `0`.
    Number,
    /// ISO-8601 datetime (or bare date) rendered as a calendar date in the
    /// viewer's local time. Unparseable values render verbatim.
    Date,
}

/// One table column: a header, the record field it reads, and its cell kind.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Column header shown above the table.
    pub header: &'static str,
    /// Record field the cell value is taken from.
    pub field: &'static str,
    /// How the value renders, including its absent-value fallback.
    pub kind: CellKind,
}

/// One displayable resource collection.
#[derive(Debug)]
pub struct ResourceSpec {
    /// Lowercase name used in CLI subcommands, status text, and logs.
    pub name: &'static str,
    /// Human title used for tabs and table headings.
    pub title: &'static str,
    /// URL path segment under `/api/`.
    pub path: &'static str,
    /// Ordered column schema.
    pub columns: &'static [ColumnSpec],
}

pub static TEAMS: ResourceSpec = ResourceSpec {
    name: "teams",
    title: "Teams",
    path: "teams",
    columns: &[
        ColumnSpec { header: "Name", field: "name", kind: CellKind::Text { fallback: "" } },
        ColumnSpec {
            header: "Description",
            field: "description",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec { header: "Members", field: "members_count", kind: CellKind::Number },
        ColumnSpec { header: "Created", field: "created_at", kind: CellKind::Date },
    ],
};

pub static USERS: ResourceSpec = ResourceSpec {
    name: "users",
    title: "Users",
    path: "users",
    columns: &[
        ColumnSpec { header: "Username", field: "username", kind: CellKind::Text { fallback: "" } },
        ColumnSpec { header: "Email", field: "email", kind: CellKind::Text { fallback: "" } },
        ColumnSpec {
            header: "First Name",
            field: "first_name",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec {
            header: "Last Name",
            field: "last_name",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec { header: "Team", field: "team_name", kind: CellKind::Text { fallback: "N/A" } },
    ],
};

pub static ACTIVITIES: ResourceSpec = ResourceSpec {
    name: "activities",
    title: "Activities",
    path: "activities",
    columns: &[
        ColumnSpec {
            header: "Activity",
            field: "activity_type",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec { header: "User", field: "user_id", kind: CellKind::Text { fallback: "" } },
        ColumnSpec { header: "Duration", field: "duration", kind: CellKind::Number },
        ColumnSpec { header: "Calories", field: "calories_burned", kind: CellKind::Number },
        ColumnSpec { header: "Distance", field: "distance", kind: CellKind::Number },
        ColumnSpec { header: "Date", field: "date", kind: CellKind::Date },
    ],
};

pub static LEADERBOARD: ResourceSpec = ResourceSpec {
    name: "leaderboard",
    title: "Leaderboard",
    path: "leaderboard",
    columns: &[
        ColumnSpec { header: "Rank", field: "rank", kind: CellKind::Number },
        ColumnSpec { header: "User", field: "user_id", kind: CellKind::Text { fallback: "" } },
        ColumnSpec { header: "Team", field: "team_id", kind: CellKind::Text { fallback: "N/A" } },
        ColumnSpec { header: "Activities", field: "total_activities", kind: CellKind::Number },
        ColumnSpec { header: "Duration", field: "total_duration", kind: CellKind::Number },
        ColumnSpec { header: "Calories", field: "total_calories", kind: CellKind::Number },
    ],
};

pub static WORKOUTS: ResourceSpec = ResourceSpec {
    name: "workouts",
    title: "Workouts",
    path: "workouts",
    columns: &[
        ColumnSpec { header: "Name", field: "name", kind: CellKind::Text { fallback: "" } },
        ColumnSpec {
            header: "Description",
            field: "description",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec {
            header: "Activity",
            field: "activity_type",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec {
            header: "Difficulty",
            field: "difficulty",
            kind: CellKind::Text { fallback: "" },
        },
        ColumnSpec { header: "Duration", field: "duration", kind: CellKind::Number },
        ColumnSpec { header: "Calories", field: "calories_estimate", kind: CellKind::Number },
    ],
};

/// Every resource view, in display order.
pub static ALL: [&ResourceSpec; 5] = [&TEAMS, &USERS, &ACTIVITIES, &LEADERBOARD, &WORKOUTS];

/// Look up a resource by its CLI name.
pub fn by_name(name: &str) -> Option<&'static ResourceSpec> {
    ALL.iter().copied().find(|resource| resource.name == name)
}
