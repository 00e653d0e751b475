//! Static datasets shown in demo mode.

use super::model::{Order, Party, Payment, Product, Staff};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub fn parties() -> Vec<Party> {
    vec![
        Party {
            id: "demo-party-1".to_string(),
            party_name: "Shree Ganesh Textiles".to_string(),
            gst_number: text("24AAACS1234F1Z5"),
            phone: text("+91 98250 11223"),
            email: text("accounts@shreeganesh.example"),
            address: text("Ring Road, Surat"),
        },
        Party {
            id: "demo-party-2".to_string(),
            party_name: "Mahalaxmi Silk Mills".to_string(),
            gst_number: text("27AABCM5678K1Z2"),
            phone: text("9822012345"),
            email: None,
            address: text("Bhiwandi"),
        },
        Party {
            id: "demo-party-3".to_string(),
            party_name: "Kaveri Cotton Traders".to_string(),
            gst_number: None,
            phone: text("(080) 2345 6789"),
            email: text("kaveri@traders.example"),
            address: text("Tiruppur"),
        },
    ]
}

pub fn staff() -> Vec<Staff> {
    vec![
        Staff {
            id: "demo-staff-1".to_string(),
            name: "Ravi Patel".to_string(),
            phone: "9876543210".to_string(),
            email: text("ravi@loom.example"),
            designation: "Loom Operator".to_string(),
            salary_amount: 18000.0,
        },
        Staff {
            id: "demo-staff-2".to_string(),
            name: "Sunita Rao".to_string(),
            phone: "9123456780".to_string(),
            email: None,
            designation: "Accountant".to_string(),
            salary_amount: 26000.0,
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "demo-product-1".to_string(),
            product_name: "Cotton Yarn 40s".to_string(),
            category: text("Yarn"),
            price: 240.0,
            stock: Some(120.0),
        },
        Product {
            id: "demo-product-2".to_string(),
            product_name: "Banarasi Silk Saree".to_string(),
            category: text("Finished Goods"),
            price: 4500.0,
            stock: Some(14.0),
        },
        Product {
            id: "demo-product-3".to_string(),
            product_name: "Polyester Grey Fabric".to_string(),
            category: text("Fabric"),
            price: 62.5,
            stock: None,
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "demo-order-1".to_string(),
            party_name: "Shree Ganesh Textiles".to_string(),
            product_name: "Cotton Yarn 40s".to_string(),
            quantity: 50.0,
            rate: 235.0,
            status: "pending".to_string(),
        },
        Order {
            id: "demo-order-2".to_string(),
            party_name: "Mahalaxmi Silk Mills".to_string(),
            product_name: "Banarasi Silk Saree".to_string(),
            quantity: 6.0,
            rate: 4400.0,
            status: "delivered".to_string(),
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "demo-payment-1".to_string(),
            party_name: "Shree Ganesh Textiles".to_string(),
            amount: 25000.0,
            payment_mode: "bank transfer".to_string(),
            reference: text("UTR 4401229"),
        },
        Payment {
            id: "demo-payment-2".to_string(),
            party_name: "Kaveri Cotton Traders".to_string(),
            amount: 7800.0,
            payment_mode: "cash".to_string(),
            reference: None,
        },
    ]
}
