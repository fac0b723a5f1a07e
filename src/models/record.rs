//! Traits shared by the typed records

/// A typed record owned by the data store, addressable by its `id`.
pub trait Record {
    fn id(&self) -> &str;
}

/// A record that references an athlete by id and by name.
pub trait AthleteRecord: Record {
    fn athlete_id(&self) -> &str;
    fn athlete_name(&self) -> &str;

    /// Lookups accept either the athlete id or the athlete name
    fn belongs_to(&self, player: &str) -> bool {
        self.athlete_id() == player || self.athlete_name() == player
    }
}

macro_rules! impl_athlete_record {
    ($ty:ty) => {
        impl $crate::models::record::Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl $crate::models::record::AthleteRecord for $ty {
            fn athlete_id(&self) -> &str {
                &self.id_atleta
            }

            fn athlete_name(&self) -> &str {
                &self.nome
            }
        }
    };
}

pub(crate) use impl_athlete_record;
