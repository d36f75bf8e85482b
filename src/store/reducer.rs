use crate::mvi::Reducer;
use crate::store::intent::CatalogIntent;
use crate::store::state::CatalogState;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::StartLoad => CatalogState::Loading,
            CatalogIntent::LoadSucceeded { gatos } => match state {
                CatalogState::Loading => CatalogState::Loaded { gatos },
                other => other,
            },
            CatalogIntent::LoadFailed { message } => match state {
                CatalogState::Loading => CatalogState::Errored { message },
                other => other,
            },
            CatalogIntent::Added { gato } => match state {
                CatalogState::Loaded { mut gatos } => {
                    gatos.push(gato);
                    CatalogState::Loaded { gatos }
                }
                other => other,
            },
            CatalogIntent::Updated { gato } => match state {
                CatalogState::Loaded { gatos } => {
                    let gatos = gatos
                        .into_iter()
                        .map(|current| {
                            if current.id == gato.id {
                                gato.clone()
                            } else {
                                current
                            }
                        })
                        .collect();
                    CatalogState::Loaded { gatos }
                }
                other => other,
            },
        }
    }
}
