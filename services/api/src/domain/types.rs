use std::fmt;

/// Resource names as they appear in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Planet,
    Character,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "User",
            Self::Planet => "Planet",
            Self::Character => "Character",
        })
    }
}

/// How the favorites endpoints pick the user they act for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// A caller-supplied user id.
    Explicit(i32),
    /// No identity given: act for the user with the lowest id.
    FirstUser,
}

// ── User ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: bool,
}

/// Partial update. `None` leaves the field untouched; for nullable columns
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl User {
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(password) = changes.password {
            self.password = password;
        }
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(is_active) = changes.is_active {
            self.is_active = is_active;
        }
    }
}

// ── Planet ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub climate: Option<Option<String>>,
    pub population: Option<Option<String>>,
    pub terrain: Option<Option<String>>,
}

impl Planet {
    pub fn apply(&mut self, changes: PlanetChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(climate) = changes.climate {
            self.climate = climate;
        }
        if let Some(population) = changes.population {
            self.population = population;
        }
        if let Some(terrain) = changes.terrain {
            self.terrain = terrain;
        }
    }
}

// ── Character ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CharacterChanges {
    pub name: Option<String>,
    pub height: Option<Option<String>>,
    pub mass: Option<Option<String>>,
    pub hair_color: Option<Option<String>>,
    pub eye_color: Option<Option<String>>,
}

impl Character {
    pub fn apply(&mut self, changes: CharacterChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(height) = changes.height {
            self.height = height;
        }
        if let Some(mass) = changes.mass {
            self.mass = mass;
        }
        if let Some(hair_color) = changes.hair_color {
            self.hair_color = hair_color;
        }
        if let Some(eye_color) = changes.eye_color {
            self.eye_color = eye_color;
        }
    }
}

// ── Favorites ────────────────────────────────────────────────────────────────

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    pub fn resource(&self) -> Resource {
        match self {
            Self::Planet(_) => Resource::Planet,
            Self::Character(_) => Resource::Character,
        }
    }
}

/// One favorite row, planet or character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// A user's favorites, dereferenced to the rows they point at.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
}
