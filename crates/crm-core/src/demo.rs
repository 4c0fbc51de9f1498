//! The demo data set the server is seeded with.

use crate::{
  customer::{Customer, CustomerStatus, CustomerType},
  visit::{Priority, Visit, VisitStatus},
};

fn s(value: &str) -> String { value.to_owned() }

/// Four customers: two doctors and two pharmacies, one of them inactive.
pub fn customers() -> Vec<Customer> {
  vec![
    Customer {
      id:             s("1"),
      name:           s("Dr. Ahmet Yılmaz"),
      kind:           CustomerType::Doctor,
      specialization: Some(s("Kardiyoloji")),
      hospital:       Some(s("Ankara Hastanesi")),
      owner:          None,
      district:       s("Çankaya"),
      city:           s("Ankara"),
      phone:          s("0532 123 45 67"),
      email:          s("ahmet.yilmaz@example.com"),
      notes:          Some(s("Yeni ilaçlara ilgili")),
      status:         CustomerStatus::Active,
    },
    Customer {
      id:             s("2"),
      name:           s("Merkez Eczanesi"),
      kind:           CustomerType::Pharmacy,
      specialization: None,
      hospital:       None,
      owner:          Some(s("Mehmet Demir")),
      district:       s("Kızılay"),
      city:           s("Ankara"),
      phone:          s("0312 234 56 78"),
      email:          s("merkez@eczane.com"),
      notes:          Some(s("Büyük stok kapasitesi")),
      status:         CustomerStatus::Active,
    },
    Customer {
      id:             s("3"),
      name:           s("Dr. Fatma Demir"),
      kind:           CustomerType::Doctor,
      specialization: Some(s("Nöroloji")),
      hospital:       Some(s("Özel Hastane")),
      owner:          None,
      district:       s("Keçiören"),
      city:           s("Ankara"),
      phone:          s("0533 345 67 89"),
      email:          s("fatma.demir@example.com"),
      notes:          Some(s("Randevu alınacak")),
      status:         CustomerStatus::Inactive,
    },
    Customer {
      id:             s("4"),
      name:           s("Sağlık Eczanesi"),
      kind:           CustomerType::Pharmacy,
      specialization: None,
      hospital:       None,
      owner:          Some(s("Ayşe Kaya")),
      district:       s("Mamak"),
      city:           s("Ankara"),
      phone:          s("0312 456 78 90"),
      email:          s("saglik@eczane.com"),
      notes:          Some(s("Hastane yakınında")),
      status:         CustomerStatus::Active,
    },
  ]
}

/// Three visits, one of them already completed.
pub fn visits() -> Vec<Visit> {
  vec![
    Visit {
      id:                 s("1"),
      customer_name:      s("Dr. Ahmet Yılmaz"),
      customer_type:      CustomerType::Doctor,
      location:           s("Ankara Hastanesi"),
      date:               s("2024-01-15"),
      time:               s("10:00"),
      status:             VisitStatus::Planned,
      notes:              Some(s("Yeni ilaç tanıtımı")),
      priority:           Some(Priority::High),
      estimated_duration: Some(60),
    },
    Visit {
      id:                 s("2"),
      customer_name:      s("Merkez Eczanesi"),
      customer_type:      CustomerType::Pharmacy,
      location:           s("Kızılay, Ankara"),
      date:               s("2024-01-15"),
      time:               s("14:00"),
      status:             VisitStatus::Completed,
      notes:              Some(s("Stok kontrolü yapıldı")),
      priority:           Some(Priority::Medium),
      estimated_duration: Some(30),
    },
    Visit {
      id:                 s("3"),
      customer_name:      s("Dr. Fatma Demir"),
      customer_type:      CustomerType::Doctor,
      location:           s("Özel Hastane"),
      date:               s("2024-01-16"),
      time:               s("09:30"),
      status:             VisitStatus::Planned,
      notes:              Some(s("Randevu alınacak")),
      priority:           Some(Priority::Low),
      estimated_duration: Some(45),
    },
  ]
}
