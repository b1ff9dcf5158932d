use crate::dtos::listingdtos::CreateListingDto;
use crate::models::listingmodel::PropertyType;

const CONTACT_PHONE: &str = "09961488645";
const CONTACT_NAME: &str = "مهندس عبدالله صالحی";

#[allow(clippy::too_many_arguments)]
fn entry(
    title: &str,
    description: &str,
    property_type: PropertyType,
    sub_type: &str,
    province: &str,
    city: &str,
    address: &str,
    price: i64,
    area: i64,
    bedrooms: Option<i32>,
    bathrooms: Option<i32>,
    parking: bool,
    image: &str,
    featured: bool,
) -> CreateListingDto {
    CreateListingDto {
        title: title.to_string(),
        description: description.to_string(),
        property_type,
        sub_type: Some(sub_type.to_string()),
        province: province.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        price,
        area,
        bedrooms,
        bathrooms,
        parking,
        images: vec![image.to_string()],
        featured,
        contact_phone: CONTACT_PHONE.to_string(),
        contact_name: CONTACT_NAME.to_string(),
    }
}

/// Fixed sample set loaded at process start.
pub fn seed_listings() -> Vec<CreateListingDto> {
    vec![
        // Featured villas
        entry(
            "فروش ویلا در منطقه توریستی جوربند",
            "ویلای زیبا با چشم‌انداز کوهستان در منطقه توریستی جوربند",
            PropertyType::Villa,
            "mountain",
            "البرز",
            "کرج",
            "جوربند، منطقه توریستی",
            8_500_000_000,
            350,
            Some(3),
            Some(2),
            true,
            "https://images.unsplash.com/photo-1613977257363-707ba9348227?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        entry(
            "فروش ویلا ساحلی در چلک نوشهر",
            "ویلای لوکس ساحلی با دسترسی مستقیم به دریا",
            PropertyType::Villa,
            "beachfront",
            "مازندران",
            "نوشهر",
            "چلک، نوشهر",
            12_800_000_000,
            450,
            Some(4),
            Some(3),
            true,
            "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        entry(
            "فروش ویلا تریبلکس منطقه سیسنگان",
            "ویلای سه طبقه با فضای باز و باغ زیبا",
            PropertyType::Villa,
            "triplex",
            "مازندران",
            "نوشهر",
            "سیسنگان، نوشهر",
            15_200_000_000,
            600,
            Some(5),
            Some(4),
            true,
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        entry(
            "فروش ویلا شهرکی در انارور نوشهر",
            "ویلای مدرن در شهرک مسکونی با امکانات کامل",
            PropertyType::Villa,
            "urban",
            "مازندران",
            "نوشهر",
            "انارور، نوشهر",
            9_500_000_000,
            300,
            Some(3),
            Some(2),
            true,
            "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        entry(
            "فروش ویلا ۷۵۰ متری در نگین نوشهر لتینگان",
            "ویلای بزرگ و لوکس با فضای سبز وسیع",
            PropertyType::Villa,
            "luxury",
            "مازندران",
            "نوشهر",
            "لتینگان، نوشهر",
            18_000_000_000,
            750,
            Some(6),
            Some(5),
            true,
            "https://images.unsplash.com/photo-1582268611958-ebfd161ef9cf?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        entry(
            "ویلا منطقه زیبای چلک",
            "ویلای دو طبقه با نمای مدرن و باغ زیبا",
            PropertyType::Villa,
            "modern",
            "مازندران",
            "نوشهر",
            "چلک، نوشهر",
            11_300_000_000,
            420,
            Some(4),
            Some(3),
            true,
            "https://images.unsplash.com/photo-1571055107559-3e67626fa8be?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        // Land
        entry(
            "فروش زمین شهرکی دریاچه الیمالات نور",
            "زمین مسکونی با چشم‌انداز دریاچه",
            PropertyType::Land,
            "residential",
            "مازندران",
            "نور",
            "الیمالات، نور",
            3_200_000_000,
            500,
            None,
            None,
            false,
            "https://images.unsplash.com/photo-1500382017468-9049fed747ef?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            true,
        ),
        entry(
            "فروش زمین ساحلی در چلک نوشهر",
            "زمین ساحلی با دسترسی به دریا",
            PropertyType::Land,
            "beachfront",
            "مازندران",
            "نوشهر",
            "چلک، نوشهر",
            4_800_000_000,
            350,
            None,
            None,
            false,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            true,
        ),
        // Apartments
        entry(
            "آپارتمان لوکس در تهران",
            "آپارتمان مدرن در بهترین منطقه تهران",
            PropertyType::Apartment,
            "luxury",
            "تهران",
            "تهران",
            "ولنجک، تهران",
            8_500_000_000,
            120,
            Some(2),
            Some(2),
            true,
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        entry(
            "آپارتمان باغ در اصفهان",
            "آپارتمان در مجموعه باغ با فضای سبز",
            PropertyType::Apartment,
            "garden",
            "اصفهان",
            "اصفهان",
            "فولادشهر، اصفهان",
            4_200_000_000,
            95,
            Some(2),
            Some(1),
            true,
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400",
            true,
        ),
        // Commercial
        entry(
            "مجتمع اداری در تهران",
            "مجتمع اداری مدرن در قلب تهران",
            PropertyType::Commercial,
            "office",
            "تهران",
            "تهران",
            "میدان ونک، تهران",
            25_000_000_000,
            800,
            None,
            None,
            true,
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            true,
        ),
        entry(
            "مرکز خرید در اصفهان",
            "مرکز تجاری در موقعیت عالی",
            PropertyType::Commercial,
            "retail",
            "اصفهان",
            "اصفهان",
            "خیابان چهارباغ، اصفهان",
            45_000_000_000,
            1500,
            None,
            None,
            true,
            "https://images.unsplash.com/photo-1555636222-cae831e670b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300",
            true,
        ),
    ]
}
