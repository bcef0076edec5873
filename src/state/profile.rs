// Profile form state
// Controlled form over a fixed sample record; nothing is ever persisted

/// Editable fields of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Department,
        ProfileField::Position,
    ];

    /// Form label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FirstName => "Nombre",
            ProfileField::LastName => "Apellido",
            ProfileField::Email => "Correo Electrónico",
            ProfileField::Phone => "Teléfono",
            ProfileField::Department => "Departamento",
            ProfileField::Position => "Posición",
        }
    }
}

/// Personal information shown on the profile page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
}

impl Default for ProfileRecord {
    /// Sample values every mount of the profile page starts from
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@empresa.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            department: "Desarrollo".to_string(),
            position: "Desarrollador Senior".to_string(),
        }
    }
}

impl ProfileRecord {
    /// Current value of a field
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Department => &self.department,
            ProfileField::Position => &self.position,
        }
    }

    /// Mutable buffer of a field, bound directly to its text input
    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Department => &mut self.department,
            ProfileField::Position => &mut self.position,
        }
    }

    /// Replace a single field, leaving the others untouched
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// "First Last", as shown next to the avatar
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
